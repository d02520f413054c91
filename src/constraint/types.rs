//! 限制类型定义

use std::fmt;

use serde::Serialize;

/// 限制检查的维度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// 汉字
    Character,
    /// 声母
    Initial,
    /// 韵母
    Final,
    /// 声调
    Tone,
}

impl Axis {
    /// 全部维度，按输出顺序
    pub const ALL: [Axis; 4] = [Axis::Character, Axis::Initial, Axis::Final, Axis::Tone];

    /// 获取维度的显示名称
    pub fn display_name(&self) -> &'static str {
        match self {
            Axis::Character => "汉字",
            Axis::Initial => "声母",
            Axis::Final => "韵母",
            Axis::Tone => "声调",
        }
    }
}

/// 限制要匹配的值，值的类型决定检查哪个维度
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "axis", content = "value", rename_all = "snake_case")]
pub enum Target {
    Character(char),
    Initial(String),
    Final(String),
    Tone(u8),
}

impl Target {
    pub fn axis(&self) -> Axis {
        match self {
            Target::Character(_) => Axis::Character,
            Target::Initial(_) => Axis::Initial,
            Target::Final(_) => Axis::Final,
            Target::Tone(_) => Axis::Tone,
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Character(ch) => write!(f, "{}", ch),
            Target::Initial(s) | Target::Final(s) => write!(f, "{}", s),
            Target::Tone(t) => write!(f, "{}", t),
        }
    }
}

/// 匹配数量的闭区间
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CountRange {
    pub min: usize,
    pub max: usize,
}

impl CountRange {
    pub fn exactly(count: usize) -> Self {
        Self {
            min: count,
            max: count,
        }
    }

    pub fn contains(&self, count: usize) -> bool {
        self.min <= count && count <= self.max
    }
}

/// 解析后的限制
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Constraint {
    /// 原始限制文本
    pub source: String,
    pub target: Target,
    pub count: CountRange,
    /// 限定位置（从 1 开始），None 表示全部位置
    pub position: Option<usize>,
}

/// 限制解析失败原因
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstraintError {
    /// 参数数量不对
    WrongTokenCount { found: usize },
    /// 非法音调
    InvalidTone { value: String },
    /// 非法声母/韵母
    UnknownPhonetic {
        value: String,
        /// 最接近的声母/韵母
        suggestion: Option<String>,
    },
    /// 数量标记开头不对
    MissingCountTag { tag: String },
    /// 数量值不对
    InvalidCount { value: String },
    /// 位置标记开头不对
    MissingPositionTag { tag: String },
    /// 位置值不对
    InvalidPosition { value: String },
}

impl fmt::Display for ConstraintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstraintError::WrongTokenCount { found } => {
                write!(f, "参数数量不对（{} 个）", found)
            }
            ConstraintError::InvalidTone { value } => write!(f, "值 {} 是非法音调", value),
            ConstraintError::UnknownPhonetic { value, suggestion } => {
                write!(f, "值 {} 是非法声母/韵母", value)?;
                if let Some(s) = suggestion {
                    write!(f, "，是否想输入 {}", s)?;
                }
                Ok(())
            }
            ConstraintError::MissingCountTag { tag } => {
                write!(f, "数量标记 {} 开头不对", tag)
            }
            ConstraintError::InvalidCount { value } => write!(f, "数量值 {} 不对", value),
            ConstraintError::MissingPositionTag { tag } => {
                write!(f, "位置标记 {} 开头不对", tag)
            }
            ConstraintError::InvalidPosition { value } => write!(f, "位置值 {} 不对", value),
        }
    }
}

impl std::error::Error for ConstraintError {}
