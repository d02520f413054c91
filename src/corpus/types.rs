//! 成语记录类型定义

use std::fmt;

use serde::{Serialize, Serializer};

use crate::phonetic::{SegmentError, Syllable};

/// 一条校验通过的成语
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    /// 成语
    pub text: String,
    /// 原始拼音（空格分隔）
    pub pinyin: String,
    /// 逐字拆分
    #[serde(skip)]
    pub chars: Vec<char>,
    /// 逐字拼音，与 `chars` 一一对应
    pub syllables: Vec<Syllable>,
}

impl Record {
    /// 成语字数
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

/// 成语被丢弃的原因
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    /// 数据类型不对
    NotAnObject,
    /// 没有词语内容
    MissingText,
    /// 词语不是字符串
    TextNotString,
    /// 字数不对
    WrongLength { text: String, length: usize },
    /// 词语重复
    Duplicate { text: String },
    /// 没有拼音
    MissingPinyin { text: String },
    /// 拼音不是字符串
    PinyinNotString { text: String },
    /// 拼音音节数与字数不一致
    SyllableCountMismatch {
        text: String,
        pinyin: String,
        expected: usize,
        found: usize,
    },
    /// 某个音节无法拆分
    MalformedSyllable { text: String, source: SegmentError },
}

impl RejectReason {
    /// 是否因音节拆分失败被丢弃（其余都是整条数据的问题）
    pub fn is_malformed_syllable(&self) -> bool {
        matches!(self, RejectReason::MalformedSyllable { .. })
    }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::NotAnObject => write!(f, "成语数据类型不对"),
            RejectReason::MissingText => write!(f, "成语没有词语内容"),
            RejectReason::TextNotString => write!(f, "成语的词语不是字符串"),
            RejectReason::WrongLength { text, length } => {
                write!(f, "成语 {} 字数为 {}，不符合要求", text, length)
            }
            RejectReason::Duplicate { text } => write!(f, "成语的词语 {} 重复了", text),
            RejectReason::MissingPinyin { text } => write!(f, "成语 {} 没有拼音", text),
            RejectReason::PinyinNotString { text } => write!(f, "成语 {} 的拼音不是字符串", text),
            RejectReason::SyllableCountMismatch {
                text,
                pinyin,
                expected,
                found,
            } => write!(
                f,
                "成语 {} 的拼音 {} 有 {} 个音节，应为 {} 个",
                text, pinyin, found, expected
            ),
            RejectReason::MalformedSyllable { text, source } => {
                write!(f, "成语 {} 的{}", text, source)
            }
        }
    }
}

impl std::error::Error for RejectReason {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RejectReason::MalformedSyllable { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// 丢弃记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rejection {
    /// 在原始数据中的下标
    pub index: usize,
    #[serde(serialize_with = "serialize_reason")]
    pub reason: RejectReason,
}

fn serialize_reason<S: Serializer>(reason: &RejectReason, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(reason)
}
