//! 按位置统计频次

use std::collections::HashMap;
use std::hash::Hash;

use serde::Serialize;

use crate::constraint::Axis;
use crate::corpus::Record;

/// 某个值及其出现次数
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValueCount<T> {
    pub value: T,
    pub count: usize,
}

/// 频次计数器，记录值首次出现的顺序
struct FrequencyCounter<T> {
    counts: Vec<(T, usize)>,
    index: HashMap<T, usize>,
}

impl<T: Clone + Eq + Hash> FrequencyCounter<T> {
    fn new() -> Self {
        Self {
            counts: Vec::new(),
            index: HashMap::new(),
        }
    }

    fn add(&mut self, value: T) {
        match self.index.get(&value) {
            Some(&i) => self.counts[i].1 += 1,
            None => {
                self.index.insert(value.clone(), self.counts.len());
                self.counts.push((value, 1));
            }
        }
    }

    /// 按频次倒序，同频次保持首次出现顺序
    fn into_sorted(self) -> Vec<ValueCount<T>> {
        let mut counts = self.counts;
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts
            .into_iter()
            .map(|(value, count)| ValueCount { value, count })
            .collect()
    }
}

/// 某个位置的可选项统计
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PositionStats {
    /// 位置（从 1 开始）
    pub position: usize,
    pub characters: Vec<ValueCount<char>>,
    pub initials: Vec<ValueCount<String>>,
    pub finals: Vec<ValueCount<String>>,
    pub tones: Vec<ValueCount<u8>>,
}

impl PositionStats {
    /// 按维度取出统计结果（值转为字符串）
    pub fn axis_counts(&self, axis: Axis) -> Vec<(String, usize)> {
        fn stringify<T: ToString>(values: &[ValueCount<T>]) -> Vec<(String, usize)> {
            values
                .iter()
                .map(|v| (v.value.to_string(), v.count))
                .collect()
        }
        match axis {
            Axis::Character => stringify(&self.characters),
            Axis::Initial => stringify(&self.initials),
            Axis::Final => stringify(&self.finals),
            Axis::Tone => stringify(&self.tones),
        }
    }
}

/// 统计每个位置上各维度的频次
pub fn aggregate(records: &[Record], phrase_length: usize) -> Vec<PositionStats> {
    (0..phrase_length)
        .map(|i| {
            let mut characters = FrequencyCounter::new();
            let mut initials = FrequencyCounter::new();
            let mut finals = FrequencyCounter::new();
            let mut tones = FrequencyCounter::new();

            for record in records {
                let (Some(&ch), Some(syllable)) = (record.chars.get(i), record.syllables.get(i))
                else {
                    continue;
                };
                characters.add(ch);
                initials.add(syllable.initial.clone());
                finals.add(syllable.final_.clone());
                tones.add(syllable.tone);
            }

            PositionStats {
                position: i + 1,
                characters: characters.into_sorted(),
                initials: initials.into_sorted(),
                finals: finals.into_sorted(),
                tones: tones.into_sorted(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SearchConfig;
    use crate::corpus::RecordBuilder;

    fn records() -> Vec<Record> {
        let mut builder = RecordBuilder::new(&SearchConfig::new());
        [
            ("一心一意", "yī xīn yī yì"),
            ("三心二意", "sān xīn èr yì"),
            ("三长两短", "sān cháng liǎng duǎn"),
        ]
        .iter()
        .map(|(text, pinyin)| builder.build_from_parts(text, pinyin).unwrap())
        .collect()
    }

    #[test]
    fn test_aggregate_positions() {
        let stats = aggregate(&records(), 4);
        assert_eq!(stats.len(), 4);
        assert_eq!(stats[0].position, 1);

        // 第一个位置：三 ×2，一 ×1
        assert_eq!(
            stats[0].characters,
            vec![
                ValueCount { value: '三', count: 2 },
                ValueCount { value: '一', count: 1 },
            ]
        );
        assert_eq!(stats[0].initials[0].value, "s");
        assert_eq!(stats[0].tones, vec![ValueCount { value: 1, count: 3 }]);
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let stats = aggregate(&records(), 4);
        // 第三个位置：一、二、两 各一次
        let values: Vec<char> = stats[2].characters.iter().map(|v| v.value).collect();
        assert_eq!(values, vec!['一', '二', '两']);
        // 第四个位置：意 ×2 在前
        assert_eq!(stats[3].characters[0], ValueCount { value: '意', count: 2 });
        assert_eq!(stats[3].characters[1].value, '短');
    }

    #[test]
    fn test_axis_counts() {
        let stats = aggregate(&records(), 4);
        assert_eq!(
            stats[1].axis_counts(Axis::Final),
            vec![("in".to_string(), 2), ("ang".to_string(), 1)]
        );
        assert_eq!(
            stats[2].axis_counts(Axis::Tone),
            vec![("1".to_string(), 1), ("4".to_string(), 1), ("3".to_string(), 1)]
        );
    }

    #[test]
    fn test_aggregate_empty() {
        let stats = aggregate(&[], 4);
        assert_eq!(stats.len(), 4);
        assert!(stats.iter().all(|s| s.characters.is_empty()));
    }
}
