//! 成语语料
//!
//! 加载成语 json，逐条校验并拆分拼音，得到去重后的成语记录

mod annotate;
mod builder;
mod loader;
mod types;

pub use annotate::derive_pinyin;
pub use builder::RecordBuilder;
pub use loader::{build_corpus, load_entries, CorpusLoad};
pub use types::{Record, RejectReason, Rejection};
