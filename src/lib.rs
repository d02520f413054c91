//! 成语搜索
//!
//! 将四字成语的拼音拆分为声母、韵母、声调，按位置/数量限制过滤成语，
//! 并统计剩余成语在各位置上的可选汉字、声母、韵母、声调

pub mod config;
pub mod constraint;
pub mod corpus;
pub mod phonetic;
pub mod pipeline;
pub mod report;

pub use config::SearchConfig;
pub use pipeline::{SearchOutcome, SearchPipeline};
