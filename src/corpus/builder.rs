//! 成语记录构建
//!
//! 逐条校验成语数据：字数、去重、拼音音节数、逐音节拆分。
//! 任一检查失败只丢弃当前这条，不影响其余数据。

use std::collections::HashSet;

use serde_json::Value;

use crate::config::SearchConfig;
use crate::corpus::annotate::derive_pinyin;
use crate::corpus::types::{Record, RejectReason};
use crate::phonetic::Segmenter;

/// 成语记录构建器
///
/// 内部维护已收录的成语集合，一个构建器对应一次语料加载
pub struct RecordBuilder {
    phrase_length: usize,
    text_key: String,
    pinyin_key: String,
    derive_missing_pinyin: bool,
    /// 已收录的成语
    seen: HashSet<String>,
}

impl RecordBuilder {
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            phrase_length: config.phrase_length,
            text_key: config.text_key.clone(),
            pinyin_key: config.pinyin_key.clone(),
            derive_missing_pinyin: config.derive_missing_pinyin,
            seen: HashSet::new(),
        }
    }

    /// 已收录数量
    pub fn accepted_count(&self) -> usize {
        self.seen.len()
    }

    /// 从一条 json 数据构建成语记录
    pub fn build(&mut self, entry: &Value) -> Result<Record, RejectReason> {
        let Some(object) = entry.as_object() else {
            return Err(RejectReason::NotAnObject);
        };

        let text = match object.get(&self.text_key) {
            None | Some(Value::Null) => return Err(RejectReason::MissingText),
            Some(Value::String(s)) if s.is_empty() => return Err(RejectReason::MissingText),
            Some(Value::String(s)) => s.as_str(),
            Some(_) => return Err(RejectReason::TextNotString),
        };
        self.check_text(text)?;

        let derived;
        let pinyin = match object.get(&self.pinyin_key) {
            Some(Value::String(s)) if !s.trim().is_empty() => s.as_str(),
            Some(Value::String(_)) | Some(Value::Null) | None => {
                derived = self.derive_pinyin(text)?;
                derived.as_str()
            }
            Some(_) => {
                return Err(RejectReason::PinyinNotString {
                    text: text.to_string(),
                })
            }
        };

        self.build_checked(text, pinyin)
    }

    /// 直接用成语和拼音构建记录
    pub fn build_from_parts(&mut self, text: &str, pinyin: &str) -> Result<Record, RejectReason> {
        if text.is_empty() {
            return Err(RejectReason::MissingText);
        }
        self.check_text(text)?;
        if pinyin.trim().is_empty() {
            return Err(RejectReason::MissingPinyin {
                text: text.to_string(),
            });
        }
        self.build_checked(text, pinyin)
    }

    /// 字数与去重检查
    fn check_text(&self, text: &str) -> Result<(), RejectReason> {
        let length = text.chars().count();
        if length != self.phrase_length {
            return Err(RejectReason::WrongLength {
                text: text.to_string(),
                length,
            });
        }
        if self.seen.contains(text) {
            return Err(RejectReason::Duplicate {
                text: text.to_string(),
            });
        }
        Ok(())
    }

    fn derive_pinyin(&self, text: &str) -> Result<String, RejectReason> {
        let missing = || RejectReason::MissingPinyin {
            text: text.to_string(),
        };
        if !self.derive_missing_pinyin {
            return Err(missing());
        }
        let pinyin = derive_pinyin(text).ok_or_else(missing)?;
        tracing::debug!("成语 {} 缺少拼音，补全为 {}", text, pinyin);
        Ok(pinyin)
    }

    fn build_checked(&mut self, text: &str, pinyin: &str) -> Result<Record, RejectReason> {
        let tokens: Vec<&str> = pinyin.split_whitespace().collect();
        if tokens.len() != self.phrase_length {
            return Err(RejectReason::SyllableCountMismatch {
                text: text.to_string(),
                pinyin: pinyin.to_string(),
                expected: self.phrase_length,
                found: tokens.len(),
            });
        }

        let syllables = tokens
            .iter()
            .map(|token| Segmenter::segment(token))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|source| RejectReason::MalformedSyllable {
                text: text.to_string(),
                source,
            })?;

        // 只有成功收录的成语才参与去重
        self.seen.insert(text.to_string());

        Ok(Record {
            text: text.to_string(),
            pinyin: pinyin.to_string(),
            chars: text.chars().collect(),
            syllables,
        })
    }
}
