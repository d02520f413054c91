//! 限制解析
//!
//! 格式错误的限制只丢弃当前这条，其余限制照常生效

use strsim::levenshtein;

use crate::constraint::types::{Constraint, ConstraintError, CountRange, Target};
use crate::phonetic::{is_final, is_initial, ALL_FINALS, ALL_INITIALS};

/// 限制中表示数量的标记
pub const COUNT_TAG: char = 'c';
/// 限制中表示位置的标记
pub const POSITION_TAG: char = 'p';
/// 限制中表示数量至少一个的值
pub const COUNT_AT_LEAST_ONE: &str = "?";

/// 最大声调值（0 代表轻声）
const MAX_TONE: u8 = 4;

/// 批量解析结果
#[derive(Debug, Clone, Default)]
pub struct ParsedConstraints {
    pub constraints: Vec<Constraint>,
    /// 被丢弃的限制原文及原因
    pub rejected: Vec<(String, ConstraintError)>,
}

/// 限制解析器
pub struct ConstraintParser {
    phrase_length: usize,
}

impl ConstraintParser {
    pub fn new(phrase_length: usize) -> Self {
        Self { phrase_length }
    }

    /// 批量解析，空白行直接跳过
    pub fn parse_all<S: AsRef<str>>(&self, inputs: &[S]) -> ParsedConstraints {
        tracing::debug!("开始解析限制...");
        let mut parsed = ParsedConstraints::default();

        for input in inputs {
            let input = input.as_ref().trim();
            if input.is_empty() {
                continue;
            }
            match self.parse(input) {
                Ok(constraint) => parsed.constraints.push(constraint),
                Err(e) => {
                    tracing::debug!("limit {} 被丢弃: {}", input, e);
                    parsed.rejected.push((input.to_string(), e));
                }
            }
        }

        tracing::debug!("共解析到 {} 条限制", parsed.constraints.len());
        parsed
    }

    /// 解析单条限制
    pub fn parse(&self, input: &str) -> Result<Constraint, ConstraintError> {
        let tokens: Vec<&str> = input.split_whitespace().collect();
        if !(2..=3).contains(&tokens.len()) {
            return Err(ConstraintError::WrongTokenCount {
                found: tokens.len(),
            });
        }

        let target = Self::parse_target(tokens[0])?;
        let count = self.parse_count(tokens[1])?;
        let position = match tokens.get(2) {
            Some(tag) => Some(self.parse_position(tag)?),
            None => None,
        };

        Ok(Constraint {
            source: tokens.join(" "),
            target,
            count,
            position,
        })
    }

    /// 解析要匹配的值
    ///
    /// 优先级：声调数字 → 声母 → 韵母 → 单个汉字
    fn parse_target(value: &str) -> Result<Target, ConstraintError> {
        // 全角、阿拉伯文等数字也按声调处理，只有 0~4 合法
        if value.chars().all(|ch| ch.is_numeric() && !ch.is_alphabetic()) {
            return match value.parse::<u8>() {
                Ok(tone) if tone <= MAX_TONE && value.len() == 1 => Ok(Target::Tone(tone)),
                _ => Err(ConstraintError::InvalidTone {
                    value: value.to_string(),
                }),
            };
        }
        if is_initial(value) {
            return Ok(Target::Initial(value.to_string()));
        }
        if is_final(value) {
            return Ok(Target::Final(value.to_string()));
        }

        let mut chars = value.chars();
        if let (Some(ch), None) = (chars.next(), chars.next()) {
            return Ok(Target::Character(ch));
        }

        Err(ConstraintError::UnknownPhonetic {
            value: value.to_string(),
            suggestion: Self::closest_phonetic(value),
        })
    }

    /// 查找编辑距离最近的声母/韵母，仅用于提示
    fn closest_phonetic(value: &str) -> Option<String> {
        // 阈值：max(1, len/4)
        let threshold = std::cmp::max(1, value.chars().count() / 4);
        ALL_INITIALS
            .iter()
            .chain(ALL_FINALS.iter())
            .map(|known| (known, levenshtein(value, known)))
            .filter(|(_, distance)| *distance <= threshold)
            .min_by_key(|(_, distance)| *distance)
            .map(|(known, _)| known.to_string())
    }

    /// 解析数量标记，如 `c2`、`c?`
    fn parse_count(&self, tag: &str) -> Result<CountRange, ConstraintError> {
        let Some(value) = tag.strip_prefix(COUNT_TAG) else {
            return Err(ConstraintError::MissingCountTag {
                tag: tag.to_string(),
            });
        };
        if value == COUNT_AT_LEAST_ONE {
            return Ok(CountRange {
                min: 1,
                max: self.phrase_length,
            });
        }
        match parse_plain_number(value) {
            Some(count) if count <= self.phrase_length => Ok(CountRange::exactly(count)),
            _ => Err(ConstraintError::InvalidCount {
                value: value.to_string(),
            }),
        }
    }

    /// 解析位置标记，如 `p3`
    fn parse_position(&self, tag: &str) -> Result<usize, ConstraintError> {
        let Some(value) = tag.strip_prefix(POSITION_TAG) else {
            return Err(ConstraintError::MissingPositionTag {
                tag: tag.to_string(),
            });
        };
        match parse_plain_number(value) {
            Some(position) if (1..=self.phrase_length).contains(&position) => Ok(position),
            _ => Err(ConstraintError::InvalidPosition {
                value: value.to_string(),
            }),
        }
    }
}

/// 解析不带符号、不带前导零的十进制数
fn parse_plain_number(value: &str) -> Option<usize> {
    if value.is_empty() || !value.chars().all(|ch| ch.is_ascii_digit()) {
        return None;
    }
    let number = value.parse::<usize>().ok()?;
    (number.to_string() == value).then_some(number)
}
