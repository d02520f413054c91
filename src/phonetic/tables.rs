//! 拼音声母、韵母、声调符号表
//!
//! 全部为封闭集合，进程内只构建一次

use std::collections::{HashMap, HashSet};

/// 无声母占位符
pub const NO_INITIAL: &str = "-";

/// 全部声母（不含无声母占位符）
pub const ALL_INITIALS: &[&str] = &[
    "b", "p", "m", "f", "d", "t", "n", "l", "g", "k", "h", "j", "q", "r", "x", "w", "y", "zh",
    "ch", "sh", "z", "c", "s",
];

/// 全部韵母（无声调）
pub const ALL_FINALS: &[&str] = &[
    "a", "ai", "an", "ang", "ao", //
    "e", "ei", "en", "eng", "er", //
    "i", "ia", "ian", "iang", "iao", "ie", "in", "ing", "io", "iong", "iu", //
    "o", "ong", "ou", //
    "u", "ua", "uai", "uan", "uang", "ui", "un", "uo", //
    "ü", "üan", "üe", "ün",
];

/// 带声调的元音，每 4 个一组对应同一个元音的 1~4 声
const TONED_VOWELS: &str = "āáǎàōóǒòēéěèīíǐìūúǔùǖǘǚǜ";

/// 声调符号所对应的元音
const BASE_VOWELS: [char; 6] = ['a', 'o', 'e', 'i', 'u', 'ü'];

lazy_static::lazy_static! {
    /// 声母集合（含无声母占位符）
    static ref INITIAL_SET: HashSet<&'static str> = {
        let mut set: HashSet<&'static str> = ALL_INITIALS.iter().copied().collect();
        set.insert(NO_INITIAL);
        set
    };

    /// 韵母集合
    static ref FINAL_SET: HashSet<&'static str> = ALL_FINALS.iter().copied().collect();

    /// 带声调元音 → (元音, 声调)
    pub(crate) static ref TONED_VOWEL_MAP: HashMap<char, (char, u8)> = TONED_VOWELS
        .chars()
        .enumerate()
        .map(|(i, ch)| (ch, (BASE_VOWELS[i / 4], (i % 4 + 1) as u8)))
        .collect();
}

/// 是否为合法声母（含无声母占位符）
pub fn is_initial(text: &str) -> bool {
    INITIAL_SET.contains(text)
}

/// 是否为合法韵母
pub fn is_final(text: &str) -> bool {
    FINAL_SET.contains(text)
}

/// 查找元音对应声调的带声调字符
///
/// 轻声 (0) 没有声调符号，返回 None
pub fn tone_mark(vowel: char, tone: u8) -> Option<char> {
    let base_index = BASE_VOWELS.iter().position(|&v| v == vowel)?;
    if !(1..=4).contains(&tone) {
        return None;
    }
    TONED_VOWELS
        .chars()
        .nth(base_index * 4 + (tone as usize - 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toned_vowel_map_size() {
        assert_eq!(TONED_VOWEL_MAP.len(), 24);
        assert_eq!(TONED_VOWEL_MAP.get(&'ǎ'), Some(&('a', 3)));
        assert_eq!(TONED_VOWEL_MAP.get(&'ō'), Some(&('o', 1)));
        assert_eq!(TONED_VOWEL_MAP.get(&'ǜ'), Some(&('ü', 4)));
        assert_eq!(TONED_VOWEL_MAP.get(&'a'), None);
    }

    #[test]
    fn test_tone_mark_inverse() {
        for (&toned, &(vowel, tone)) in TONED_VOWEL_MAP.iter() {
            assert_eq!(tone_mark(vowel, tone), Some(toned));
        }
        assert_eq!(tone_mark('a', 0), None);
        assert_eq!(tone_mark('a', 5), None);
        assert_eq!(tone_mark('x', 1), None);
    }

    #[test]
    fn test_sets() {
        assert!(is_initial("zh"));
        assert!(is_initial(NO_INITIAL));
        assert!(!is_initial("v"));
        assert!(is_final("üe"));
        assert!(is_final("er"));
        assert!(!is_final("ue"));
        // 声母与韵母不重叠
        assert!(ALL_INITIALS.iter().all(|i| !is_final(i)));
    }
}
