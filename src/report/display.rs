// 结果文本输出
//
// 剩余成语每行 4 个；每个位置依次输出汉字、声母、韵母、声调的可选项

use std::fmt::Write;

use crate::config::SearchConfig;
use crate::constraint::Axis;
use crate::pipeline::SearchOutcome;

/// 每行输出的成语数
const PHRASES_PER_ROW: usize = 4;
/// 每个成语的显示宽度（字符数）
const PHRASE_COLUMN_WIDTH: usize = 30;

/// 输出控制：(维度, 分隔符, 是否受汉字数量上限限制)
const AXIS_OUTPUT: [(Axis, &str, bool); 4] = [
    (Axis::Character, "", true),
    (Axis::Initial, " ", false),
    (Axis::Final, " ", false),
    (Axis::Tone, "", false),
];

/// 生成结果报告
pub fn render_report(outcome: &SearchOutcome, config: &SearchConfig) -> String {
    let mut out = String::new();
    let survivors = &outcome.survivors;

    let _ = writeln!(out, "剩余可选成语({}个): ", survivors.len());
    let shown = &survivors[..survivors.len().min(config.output_phrase_max)];
    for row in shown.chunks(PHRASES_PER_ROW) {
        out.push_str("    ");
        for record in row {
            let cell = format!("{}  {}", record.text, record.pinyin);
            let _ = write!(out, "{:<width$}", cell, width = PHRASE_COLUMN_WIDTH);
        }
        out.push('\n');
    }

    for stats in &outcome.positions {
        let _ = writeln!(out, "位置 {} 可选（按频次倒序）: ", stats.position);
        for (axis, separator, limited) in AXIS_OUTPUT {
            let counts = stats.axis_counts(axis);
            let max_count_msg = if counts.len() > 2 {
                format!("，最高频次为 {}", counts[0].1)
            } else {
                String::new()
            };
            let _ = write!(
                out,
                "    {}(共 {} 个{}): ",
                axis.display_name(),
                counts.len(),
                max_count_msg
            );

            let take = if limited {
                config.output_char_max
            } else {
                counts.len()
            };
            let values: Vec<&str> = counts
                .iter()
                .take(take)
                .map(|(value, _)| value.as_str())
                .collect();
            let _ = writeln!(out, "{}", values.join(separator));
        }
    }

    out
}
