// 搜索流程
//
// 语料构建 → 限制解析 → 过滤 → 按位置统计
// 每一步的丢弃都只影响单条数据，流程本身不会因此失败

use anyhow::Result;
use serde::Serialize;
use serde_json::Value;

use crate::config::SearchConfig;
use crate::constraint::{Constraint, ConstraintFilter, ConstraintParser};
use crate::corpus::{build_corpus, load_entries, Record, Rejection};
use crate::report::{aggregate, render_report, PositionStats};

/// 被丢弃的限制
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedConstraint {
    pub source: String,
    pub reason: String,
}

/// 一次搜索的结果
#[derive(Debug, Clone, Serialize)]
pub struct SearchOutcome {
    /// 原始数据条数
    pub total_entries: usize,
    /// 校验通过的成语数
    pub records_loaded: usize,
    pub rejected_entries: Vec<Rejection>,
    /// 生效的限制
    pub constraints: Vec<Constraint>,
    pub rejected_constraints: Vec<RejectedConstraint>,
    /// 满足全部限制的成语，保持原始顺序
    pub survivors: Vec<Record>,
    /// 每个位置的可选项统计
    pub positions: Vec<PositionStats>,
}

/// 搜索流程（可复用，配置显式传入）
pub struct SearchPipeline {
    config: SearchConfig,
}

impl SearchPipeline {
    pub fn new(config: SearchConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// 从配置的语料文件搜索
    pub fn run_from_file(&self) -> Result<SearchOutcome> {
        let entries = load_entries(&self.config.corpus_path)?;
        Ok(self.run(&entries))
    }

    /// 对给定的原始数据搜索
    pub fn run(&self, entries: &[Value]) -> SearchOutcome {
        let phrase_length = self.config.phrase_length;

        let corpus = build_corpus(entries, &self.config);
        let parsed = ConstraintParser::new(phrase_length).parse_all(&self.config.constraints);
        let filter = ConstraintFilter::new(&parsed.constraints, phrase_length);

        let survivors = filter.apply(&corpus.records);
        let positions = aggregate(&survivors, phrase_length);

        tracing::info!(
            "成语 {} 条（丢弃 {} 条），限制 {} 条（丢弃 {} 条），剩余 {} 条",
            corpus.records.len(),
            corpus.rejected.len(),
            filter.len(),
            parsed.rejected.len(),
            survivors.len()
        );

        SearchOutcome {
            total_entries: entries.len(),
            records_loaded: corpus.records.len(),
            rejected_entries: corpus.rejected,
            constraints: parsed.constraints,
            rejected_constraints: parsed
                .rejected
                .into_iter()
                .map(|(source, e)| RejectedConstraint {
                    source,
                    reason: e.to_string(),
                })
                .collect(),
            survivors,
            positions,
        }
    }

    /// 生成文本报告
    pub fn render(&self, outcome: &SearchOutcome) -> String {
        render_report(outcome, &self.config)
    }
}
