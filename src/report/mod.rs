//! 结果统计与输出
//!
//! 统计剩余成语在各个位置上的可选汉字、声母、韵母、声调，按频次倒序

mod aggregation;
mod display;

pub use aggregation::{aggregate, PositionStats, ValueCount};
pub use display::render_report;
