//! Plain-text report rendering for terminal use

use crate::analyzer::AnalysisReport;
use std::fmt::Write;

/// Render the report as compact plain text
pub fn render(report: &AnalysisReport) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Zero-value interval analysis");
    let _ = writeln!(out, "source: {}", report.source);
    let _ = writeln!(out, "generated: {}", report.generated_at);
    let _ = writeln!(
        out,
        "shape: {} rows x {} columns",
        report.shape.0, report.shape.1
    );
    let targets: Vec<String> = report
        .target_columns
        .iter()
        .map(|t| format!("{} (col {})", t.name, t.position))
        .collect();
    let _ = writeln!(out, "target columns: {}", targets.join(", "));
    let _ = writeln!(
        out,
        "zero rows: {}  intervals: {}",
        report.summary.total_zero_rows, report.summary.interval_count
    );

    if report.intervals.is_empty() {
        let _ = writeln!(out, "no zero-value intervals found");
        return out;
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{:>4} {:>10} {:>10} {:>8}  range", "#", "start", "end", "rows");
    for (i, interval) in report.intervals.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>4} {:>10} {:>10} {:>8}  {} - {}",
            i + 1,
            interval.start_row,
            interval.end_row,
            interval.length,
            interval.start_label,
            interval.end_label
        );
    }

    if let (Some(average), Some(max), Some(min)) = (
        report.summary.average_length,
        report.summary.max_length,
        report.summary.min_length,
    ) {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "duration avg {:.2}  max {}  min {}",
            average, max, min
        );
    }
    out
}
