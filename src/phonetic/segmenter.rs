//! 拼音音节拆分器

use std::fmt;

use unicode_normalization::UnicodeNormalization;

use crate::phonetic::tables::{is_final, is_initial, NO_INITIAL, TONED_VOWEL_MAP};
use crate::phonetic::types::Syllable;

/// 音节拆分失败原因
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentError {
    /// 韵母不在韵母表中，且前两个字符都不是带声调元音
    MissingToneMark { syllable: String, final_: String },
    /// 去声调后的韵母不在韵母表中
    UnknownFinal { syllable: String, final_: String },
}

impl fmt::Display for SegmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SegmentError::MissingToneMark { syllable, final_ } => {
                write!(f, "拼音 {} 的韵母 {} 找不到声调", syllable, final_)
            }
            SegmentError::UnknownFinal { syllable, final_ } => {
                write!(f, "拼音 {} 的韵母 {} 不对", syllable, final_)
            }
        }
    }
}

impl std::error::Error for SegmentError {}

/// 拼音音节拆分器
pub struct Segmenter;

impl Segmenter {
    /// 拆分单个带声调拼音，如 `hǎo` → (`h`, `ao`, 3)
    ///
    /// 韵母本身已在韵母表中时视为轻声
    pub fn segment(syllable: &str) -> Result<Syllable, SegmentError> {
        let normalized: String = syllable.nfc().collect();
        let (initial, rest) = Self::split_initial(&normalized);

        if is_final(rest) {
            return Ok(Syllable::new(initial, rest, 0));
        }

        // 声调符号只会出现在韵母的前两个字符上
        let Some(toned) = rest
            .chars()
            .take(2)
            .find(|ch| TONED_VOWEL_MAP.contains_key(ch))
        else {
            return Err(SegmentError::MissingToneMark {
                syllable: normalized.clone(),
                final_: rest.to_string(),
            });
        };
        let (vowel, tone) = TONED_VOWEL_MAP[&toned];

        let mut final_ = rest.replace(toned, vowel.encode_utf8(&mut [0; 4]));
        // ü 在 j/q/x/y 后写作 u，带声调时 üe 会还原成 ue
        if final_ == "ue" {
            final_ = "üe".to_string();
        }

        if !is_final(&final_) {
            return Err(SegmentError::UnknownFinal {
                syllable: normalized.clone(),
                final_,
            });
        }

        Ok(Syllable::new(initial, final_, tone))
    }

    /// 切出声母，优先匹配两个字母的声母
    fn split_initial(text: &str) -> (&str, &str) {
        for len in [2, 1] {
            if let Some((idx, ch)) = text.char_indices().nth(len - 1) {
                let end = idx + ch.len_utf8();
                let prefix = &text[..end];
                if prefix != NO_INITIAL && is_initial(prefix) {
                    return (prefix, &text[end..]);
                }
            }
        }
        (NO_INITIAL, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phonetic::tables::{tone_mark, ALL_FINALS};

    fn seg(text: &str) -> (String, String, u8) {
        let s = Segmenter::segment(text).unwrap();
        (s.initial, s.final_, s.tone)
    }

    /// 按标调规则给韵母加声调符号（a/e 优先，ou 标 o，否则标最后一个元音）
    fn mark_final(final_: &str, tone: u8) -> String {
        let target = if let Some(idx) = final_.find('a') {
            idx
        } else if let Some(idx) = final_.find('e') {
            idx
        } else if let Some(idx) = final_.find("ou") {
            idx
        } else {
            final_
                .char_indices()
                .filter(|(_, ch)| "aoeiuü".contains(*ch))
                .map(|(idx, _)| idx)
                .last()
                .unwrap()
        };
        let vowel = final_[target..].chars().next().unwrap();
        let mut result = String::new();
        result.push_str(&final_[..target]);
        result.push(tone_mark(vowel, tone).unwrap());
        result.push_str(&final_[target + vowel.len_utf8()..]);
        result
    }

    #[test]
    fn test_segment_basic() {
        assert_eq!(seg("hǎo"), ("h".into(), "ao".into(), 3));
        assert_eq!(seg("zhuāng"), ("zh".into(), "uang".into(), 1));
        assert_eq!(seg("guó"), ("g".into(), "uo".into(), 2));
        assert_eq!(seg("xióng"), ("x".into(), "iong".into(), 2));
    }

    #[test]
    fn test_segment_no_initial() {
        assert_eq!(seg("ài"), ("-".into(), "ai".into(), 4));
        assert_eq!(seg("ér"), ("-".into(), "er".into(), 2));
        assert_eq!(seg("ōu"), ("-".into(), "ou".into(), 1));
    }

    #[test]
    fn test_segment_neutral_tone() {
        assert_eq!(seg("er"), ("-".into(), "er".into(), 0));
        assert_eq!(seg("de"), ("d".into(), "e".into(), 0));
        assert_eq!(seg("lü"), ("l".into(), "ü".into(), 0));
    }

    #[test]
    fn test_segment_umlaut() {
        assert_eq!(seg("lǜ"), ("l".into(), "ü".into(), 4));
        assert_eq!(seg("nüè"), ("n".into(), "üe".into(), 4));
    }

    #[test]
    fn test_segment_ue_special_case() {
        // 已知特例：去声调后的 ue 一律改写为 üe
        assert_eq!(seg("xué"), ("x".into(), "üe".into(), 2));
        assert_eq!(seg("yuè"), ("y".into(), "üe".into(), 4));
        assert_eq!(seg("jué"), ("j".into(), "üe".into(), 2));
    }

    #[test]
    fn test_segment_decomposed_input() {
        // a + 组合用抑扬符 (U+030C)
        assert_eq!(seg("ha\u{030C}o"), ("h".into(), "ao".into(), 3));
        assert_eq!(seg("lu\u{0308}\u{0301}"), ("l".into(), "ü".into(), 2));
    }

    #[test]
    fn test_segment_malformed() {
        assert!(matches!(
            Segmenter::segment("hao3"),
            Err(SegmentError::MissingToneMark { .. })
        ));
        assert!(matches!(
            Segmenter::segment(""),
            Err(SegmentError::MissingToneMark { .. })
        ));
        // 声调符号在第三个字符上
        assert!(matches!(
            Segmenter::segment("iaǒ"),
            Err(SegmentError::MissingToneMark { .. })
        ));
        assert!(matches!(
            Segmenter::segment("hǎx"),
            Err(SegmentError::UnknownFinal { .. })
        ));
    }

    #[test]
    fn test_segment_all_marked_finals() {
        for final_ in ALL_FINALS {
            for tone in 1..=4 {
                let syllable = format!("d{}", mark_final(final_, tone));
                let s = Segmenter::segment(&syllable).unwrap();
                assert_eq!(s.initial, "d", "{}", syllable);
                assert_eq!(&s.final_, final_, "{}", syllable);
                assert_eq!(s.tone, tone, "{}", syllable);
            }
        }
    }

    #[test]
    fn test_segment_agrees_with_pinyin_crate() {
        use pinyin::ToPinyin;

        for (ch, tone) in [('好', 3), ('学', 2), ('爱', 4), ('中', 1), ('国', 2)] {
            let py = ch.to_pinyin().unwrap();
            let s = Segmenter::segment(py.with_tone()).unwrap();
            assert_eq!(s.tone, tone, "{}", ch);
        }
    }
}
