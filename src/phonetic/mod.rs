//! 拼音音节拆分
//!
//! 将带声调符号的拼音音节拆分为：声母、韵母、声调
//!
//! ## 处理流程
//! 1. Unicode 归一化 (NFC)
//! 2. 最长匹配声母（两字母 → 单字母 → 无声母）
//! 3. 韵母去声调符号，还原声调数字
//! 4. 韵母合法性校验

mod segmenter;
mod tables;
mod types;

pub use segmenter::{SegmentError, Segmenter};
pub use tables::{is_final, is_initial, tone_mark, ALL_FINALS, ALL_INITIALS, NO_INITIAL};
pub use types::Syllable;
