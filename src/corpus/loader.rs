// 成语语料加载
//
// 读取成语 json 文件（顶层为数组），逐条构建成语记录

use std::path::Path;

use anyhow::Result;
use serde_json::Value;

use crate::config::SearchConfig;
use crate::corpus::builder::RecordBuilder;
use crate::corpus::types::{Record, RejectReason, Rejection};

/// 语料加载结果
#[derive(Debug, Clone, Default)]
pub struct CorpusLoad {
    /// 校验通过的成语，保持原始顺序
    pub records: Vec<Record>,
    /// 被丢弃的数据及原因
    pub rejected: Vec<Rejection>,
}

impl CorpusLoad {
    /// 因音节拆分失败被丢弃的数量
    pub fn malformed_syllable_count(&self) -> usize {
        self.rejected
            .iter()
            .filter(|r| r.reason.is_malformed_syllable())
            .count()
    }
}

/// 读取成语 json 文件
///
/// 顶层不是数组时视为空语料
pub fn load_entries(path: &Path) -> Result<Vec<Value>> {
    tracing::debug!("开始加载全量成语数据: {:?}", path);
    let content = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("读取成语数据文件 {:?} 失败: {}", path, e))?;
    let value: Value = serde_json::from_str(&content)?;

    match value {
        Value::Array(entries) => Ok(entries),
        _ => {
            tracing::warn!("成语数据顶层不是数组，按空数据处理: {:?}", path);
            Ok(Vec::new())
        }
    }
}

/// 逐条构建成语记录
pub fn build_corpus(entries: &[Value], config: &SearchConfig) -> CorpusLoad {
    tracing::debug!("配置的成语字数是：{}", config.phrase_length);

    let mut builder = RecordBuilder::new(config);
    let mut load = CorpusLoad::default();

    for (index, entry) in entries.iter().enumerate() {
        match builder.build(entry) {
            Ok(record) => load.records.push(record),
            Err(reason) => {
                if matches!(reason, RejectReason::WrongLength { .. }) {
                    tracing::trace!("第 {} 个成语: {}", index, reason);
                } else {
                    tracing::debug!("第 {} 个成语: {}", index, reason);
                }
                load.rejected.push(Rejection { index, reason });
            }
        }
    }

    tracing::debug!(
        "全量成语数据加载完毕，总数: {}，丢弃: {}",
        load.records.len(),
        load.rejected.len()
    );
    load
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_build_corpus_keeps_order_and_dedups() {
        let entries = vec![
            json!({"word": "一心一意", "pinyin": "yī xīn yī yì"}),
            json!({"word": "三心二意", "pinyin": "sān xīn èr yì"}),
            json!({"word": "一心一意", "pinyin": "yī xīn yī yì"}),
            json!({"word": "好", "pinyin": "hǎo"}),
            json!({"word": "坏坏坏坏", "pinyin": "huai huai huai huai4"}),
        ];
        let load = build_corpus(&entries, &SearchConfig::new());

        let texts: Vec<&str> = load.records.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, vec!["一心一意", "三心二意"]);
        assert_eq!(load.rejected.len(), 3);
        assert_eq!(load.rejected[0].index, 2);
        assert!(matches!(
            load.rejected[0].reason,
            RejectReason::Duplicate { .. }
        ));
        assert_eq!(load.malformed_syllable_count(), 1);
    }

    #[test]
    fn test_every_record_has_phrase_length() {
        let entries = vec![
            json!({"word": "画蛇添足", "pinyin": "huà shé tiān zú"}),
            json!({"word": "守株待兔", "pinyin": "shǒu zhū dài tù"}),
            json!({"word": "刻舟求剑", "pinyin": "kè zhōu qiú jiàn"}),
        ];
        let load = build_corpus(&entries, &SearchConfig::new());
        assert_eq!(load.records.len(), 3);
        for record in &load.records {
            assert_eq!(record.chars.len(), 4);
            assert_eq!(record.syllables.len(), 4);
        }
    }

    #[test]
    fn test_load_entries_from_file() {
        let temp = tempfile::tempdir().expect("create temp dir");
        let path = temp.path().join("idiom.json");
        std::fs::write(
            &path,
            r#"[{"word": "一心一意", "pinyin": "yī xīn yī yì"}, 42]"#,
        )
        .expect("write corpus");

        let entries = load_entries(&path).expect("load entries");
        assert_eq!(entries.len(), 2);
        let load = build_corpus(&entries, &SearchConfig::new());
        assert_eq!(load.records.len(), 1);
        assert_eq!(load.rejected[0].reason, RejectReason::NotAnObject);
    }

    #[test]
    fn test_load_entries_non_array_is_empty() {
        let temp = tempfile::tempdir().expect("create temp dir");
        let path = temp.path().join("idiom.json");
        std::fs::write(&path, r#"{"word": "一心一意"}"#).expect("write corpus");
        assert!(load_entries(&path).expect("load entries").is_empty());
    }

    #[test]
    fn test_load_entries_missing_file() {
        let temp = tempfile::tempdir().expect("create temp dir");
        assert!(load_entries(&temp.path().join("missing.json")).is_err());
    }
}
