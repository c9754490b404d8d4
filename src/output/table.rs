//! Aligned-table renderer.
//!
//! Column widths are fixed except for the name column, which stretches
//! to two characters past the longest name in the whole batch. The
//! header line is indented so its labels sit over the metric columns.

use crate::aggregator::Summary;
use log::debug;
use std::io::{self, Write};

/// Width of the `file` / `func` column
const KIND_WIDTH: usize = 5;

/// Slack between the longest name and the first metric column
const NAME_SLACK: usize = 2;

/// Widths of the four metric columns, in row order
const METRIC_WIDTHS: [usize; 4] = [8, 10, 9, 8];

/// Labels over the metric columns
const HEADER_LABELS: &str = "%line   %branch   %taken   %call";

/// Render the header plus one aligned row per record.
///
/// An empty batch still renders the header, with the name column at its
/// minimum width.
pub fn render_table(summaries: &[Summary]) -> Vec<String> {
    let name_width = NAME_SLACK
        + summaries
            .iter()
            .map(|s| s.name.chars().count())
            .max()
            .unwrap_or(0);

    debug!(
        "Rendering {} rows, name column width {}",
        summaries.len(),
        name_width
    );

    let mut out = Vec::with_capacity(summaries.len() + 1);
    out.push(format!(
        "{}{}",
        " ".repeat(KIND_WIDTH + name_width),
        HEADER_LABELS
    ));

    for summary in summaries {
        let metrics = [
            summary.lines_executed,
            summary.branches_executed,
            summary.taken_at_least_once,
            summary.calls_executed,
        ];

        let mut row = String::new();
        push_padded(&mut row, summary.kind.label(), KIND_WIDTH);
        push_padded(&mut row, &summary.name, name_width);
        for (value, width) in metrics.into_iter().zip(METRIC_WIDTHS) {
            push_padded(&mut row, &ratio_cell(value), width);
        }
        out.push(row);
    }

    out
}

/// Render the table and write it line by line.
pub fn write_table(summaries: &[Summary], mut writer: impl Write) -> io::Result<()> {
    for line in render_table(summaries) {
        writeln!(writer, "{line}")?;
    }
    Ok(())
}

/// A present metric renders as a 6-wide 2-decimal number, an absent one
/// as the 6-char literal `   N/A`.
fn ratio_cell(value: Option<f64>) -> String {
    match value {
        Some(pct) => format!("{pct:6.2}"),
        None => "   N/A".to_string(),
    }
}

/// Pad with trailing spaces up to `width`; wider content is kept as-is,
/// never truncated.
fn push_padded(row: &mut String, cell: &str, width: usize) {
    row.push_str(cell);
    let len = cell.chars().count();
    for _ in len..width {
        row.push(' ');
    }
}
