//! 成语过滤限制
//!
//! 限制格式：`[汉字/声母/韵母/01234声调] [c01234? 数量] [p1234 位置]`
//!
//! - `iang c0`：没有 iang 这个韵母
//! - `好 c?`：有 好 这个字，但不知道有几个
//! - `2 c1 p2`：在第二个位置是二声
//! - `2 c0 p2`：在第二个位置不能是二声
//! - `- c1 p4`：第四个位置没有声母

mod compiler;
mod parser;
mod types;

pub use compiler::{CompiledConstraint, ConstraintFilter};
pub use parser::{
    ConstraintParser, ParsedConstraints, COUNT_AT_LEAST_ONE, COUNT_TAG, POSITION_TAG,
};
pub use types::{Axis, Constraint, ConstraintError, CountRange, Target};
