//! 限制编译与过滤
//!
//! 每条限制编译为对成语记录的检查，成语需满足全部限制

use std::ops::Range;

use crate::constraint::types::{Constraint, CountRange, Target};
use crate::corpus::Record;

/// 编译后的限制
#[derive(Debug, Clone)]
pub struct CompiledConstraint {
    source: String,
    target: Target,
    count: CountRange,
    /// 检查的位置范围（从 0 开始）
    scope: Range<usize>,
}

impl CompiledConstraint {
    pub fn compile(constraint: &Constraint, phrase_length: usize) -> Self {
        // 位置 0 不存在，按空范围处理（永远匹配 0 个）
        let scope = match constraint.position {
            Some(position) => match position.checked_sub(1) {
                Some(index) => index..position,
                None => 0..0,
            },
            None => 0..phrase_length,
        };
        tracing::debug!(
            "【{}】生成过滤函数：count_min={}, count_max={}, val={}, axis={:?}, scope={:?}",
            constraint.source,
            constraint.count.min,
            constraint.count.max,
            constraint.target,
            constraint.target.axis(),
            scope
        );
        Self {
            source: constraint.source.clone(),
            target: constraint.target.clone(),
            count: constraint.count,
            scope,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// 范围内匹配的位置数
    pub fn count_matches(&self, record: &Record) -> usize {
        let end = self.scope.end.min(record.len());
        let start = self.scope.start.min(end);
        (start..end).filter(|&i| self.matches_at(record, i)).count()
    }

    pub fn matches(&self, record: &Record) -> bool {
        self.count.contains(self.count_matches(record))
    }

    fn matches_at(&self, record: &Record, index: usize) -> bool {
        if let Target::Character(ch) = &self.target {
            return record.chars.get(index) == Some(ch);
        }
        let Some(syllable) = record.syllables.get(index) else {
            return false;
        };
        match &self.target {
            Target::Character(_) => false,
            Target::Initial(initial) => syllable.initial == *initial,
            Target::Final(final_) => syllable.final_ == *final_,
            Target::Tone(tone) => syllable.tone == *tone,
        }
    }
}

/// 成语过滤器
#[derive(Debug, Clone, Default)]
pub struct ConstraintFilter {
    constraints: Vec<CompiledConstraint>,
}

impl ConstraintFilter {
    pub fn new(constraints: &[Constraint], phrase_length: usize) -> Self {
        Self {
            constraints: constraints
                .iter()
                .map(|c| CompiledConstraint::compile(c, phrase_length))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    /// 是否满足全部限制（没有限制时全部通过）
    pub fn accepts(&self, record: &Record) -> bool {
        self.constraints.iter().all(|c| c.matches(record))
    }

    /// 过滤成语，保持原始顺序
    pub fn apply(&self, records: &[Record]) -> Vec<Record> {
        records
            .iter()
            .filter(|record| self.accepts(record))
            .cloned()
            .collect()
    }
}
