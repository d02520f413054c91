//! 拼音类型定义

use serde::{Deserialize, Serialize};

/// 音节（与汉字一一对应）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Syllable {
    /// 声母，无声母时为 `-`
    pub initial: String,
    /// 韵母（无声调）
    #[serde(rename = "final")]
    pub final_: String,
    /// 声调 0~4，0 代表轻声
    pub tone: u8,
}

impl Syllable {
    pub fn new(initial: impl Into<String>, final_: impl Into<String>, tone: u8) -> Self {
        Self {
            initial: initial.into(),
            final_: final_.into(),
            tone,
        }
    }
}
