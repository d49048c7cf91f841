//! Markdown report rendering
//!
//! Produces the full analysis document: header, data overview, target
//! columns, zero-value statistics, one section per interval, and the
//! aggregate summary (or an explicit notice when no intervals exist).

use crate::analyzer::AnalysisReport;
use std::fmt::Write;

/// Render the report as a Markdown document
pub fn render(report: &AnalysisReport) -> String {
    let mut doc = String::new();

    let _ = writeln!(doc, "# Zero-Value Interval Analysis Report\n");
    let _ = writeln!(doc, "- Generated: {}", report.generated_at);
    let _ = writeln!(doc, "- Source file: {}", report.source);
    let _ = writeln!(doc, "- Total rows: {}\n", report.shape.0);

    data_overview(&mut doc, report);
    target_columns(&mut doc, report);
    statistics(&mut doc, report);

    if report.intervals.is_empty() {
        let _ = writeln!(doc, "## No Zero-Value Intervals Found");
        return doc;
    }

    interval_details(&mut doc, report);
    summary_statistics(&mut doc, report);
    doc
}

fn data_overview(doc: &mut String, report: &AnalysisReport) {
    let _ = writeln!(doc, "## Data Overview\n");
    let _ = writeln!(
        doc,
        "- Shape: {} rows x {} columns",
        report.shape.0, report.shape.1
    );
    let _ = writeln!(doc, "- Columns: {}\n", report.columns.join(", "));

    if report.preview.is_empty() {
        return;
    }
    let _ = writeln!(doc, "First {} rows:\n", report.preview.len());
    let _ = writeln!(doc, "| {} |", escaped_cells(&report.columns).join(" | "));
    let _ = writeln!(doc, "|{}", "---|".repeat(report.columns.len()));
    for row in &report.preview {
        let _ = writeln!(doc, "| {} |", escaped_cells(row).join(" | "));
    }
    doc.push('\n');
}

fn target_columns(doc: &mut String, report: &AnalysisReport) {
    let _ = writeln!(doc, "## Target Columns\n");
    for target in &report.target_columns {
        let _ = writeln!(doc, "- {} (column {})", target.name, target.position);
    }
    doc.push('\n');
}

fn statistics(doc: &mut String, report: &AnalysisReport) {
    let _ = writeln!(doc, "## Zero-Value Statistics\n");
    let _ = writeln!(doc, "- Zero-value rows: {}", report.summary.total_zero_rows);
    let _ = writeln!(
        doc,
        "- Zero-value intervals: {}\n",
        report.summary.interval_count
    );
}

fn interval_details(doc: &mut String, report: &AnalysisReport) {
    let _ = writeln!(doc, "## Interval Details\n");
    for (i, interval) in report.intervals.iter().enumerate() {
        let _ = writeln!(doc, "### Interval {}\n", i + 1);
        let _ = writeln!(
            doc,
            "- Row range: {} - {}",
            interval.start_row, interval.end_row
        );
        let _ = writeln!(
            doc,
            "- Time range: {} - {}",
            interval.start_label, interval.end_label
        );
        let _ = writeln!(doc, "- Duration: {} data points\n", interval.length);
    }
}

fn summary_statistics(doc: &mut String, report: &AnalysisReport) {
    let _ = writeln!(doc, "## Summary Statistics\n");
    if let Some(average) = report.summary.average_length {
        let _ = writeln!(doc, "- Average duration: {:.2} data points", average);
    }
    if let Some(max) = report.summary.max_length {
        let _ = writeln!(doc, "- Longest duration: {} data points", max);
    }
    if let Some(min) = report.summary.min_length {
        let _ = writeln!(doc, "- Shortest duration: {} data points", min);
    }
}

/// Escape pipes so cell text cannot break the preview table
fn escaped_cells(cells: &[String]) -> Vec<String> {
    cells.iter().map(|c| c.replace('|', "\\|")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::TargetColumn;
    use crate::detector::{RunSummary, ZeroRunInterval};

    fn sample_report(intervals: Vec<ZeroRunInterval>) -> AnalysisReport {
        let total: usize = intervals.iter().map(|i| i.length).sum();
        let summary = if intervals.is_empty() {
            RunSummary {
                interval_count: 0,
                total_zero_rows: 0,
                average_length: None,
                max_length: None,
                min_length: None,
            }
        } else {
            RunSummary {
                interval_count: intervals.len(),
                total_zero_rows: total,
                average_length: Some(total as f64 / intervals.len() as f64),
                max_length: intervals.iter().map(|i| i.length).max(),
                min_length: intervals.iter().map(|i| i.length).min(),
            }
        };
        AnalysisReport {
            source: "readings.csv".to_string(),
            generated_at: "2025-06-17 10:00:00".to_string(),
            shape: (6, 3),
            columns: vec!["time".to_string(), "a".to_string(), "b".to_string()],
            preview: vec![vec![
                "08:00".to_string(),
                "1".to_string(),
                "0".to_string(),
            ]],
            time_column: "time".to_string(),
            target_columns: vec![TargetColumn {
                name: "b".to_string(),
                position: 3,
            }],
            intervals,
            summary,
        }
    }

    fn interval(start: usize, end: usize) -> ZeroRunInterval {
        ZeroRunInterval {
            start_row: start,
            end_row: end,
            start_label: format!("t{}", start),
            end_label: format!("t{}", end),
            length: end - start + 1,
        }
    }

    #[test]
    fn test_header_and_overview() {
        let doc = render(&sample_report(vec![interval(1, 2)]));
        assert!(doc.starts_with("# Zero-Value Interval Analysis Report"));
        assert!(doc.contains("- Generated: 2025-06-17 10:00:00"));
        assert!(doc.contains("- Source file: readings.csv"));
        assert!(doc.contains("- Shape: 6 rows x 3 columns"));
        assert!(doc.contains("- Columns: time, a, b"));
        assert!(doc.contains("| time | a | b |"));
        assert!(doc.contains("| 08:00 | 1 | 0 |"));
    }

    #[test]
    fn test_target_columns_listed_with_position() {
        let doc = render(&sample_report(vec![interval(1, 2)]));
        assert!(doc.contains("- b (column 3)"));
    }

    #[test]
    fn test_interval_sections() {
        let doc = render(&sample_report(vec![interval(1, 2), interval(4, 5)]));
        assert!(doc.contains("### Interval 1"));
        assert!(doc.contains("### Interval 2"));
        assert!(doc.contains("- Row range: 1 - 2"));
        assert!(doc.contains("- Time range: t1 - t2"));
        assert!(doc.contains("- Duration: 2 data points"));
    }

    #[test]
    fn test_summary_statistics_formatting() {
        let doc = render(&sample_report(vec![interval(1, 2), interval(4, 6)]));
        assert!(doc.contains("- Average duration: 2.50 data points"));
        assert!(doc.contains("- Longest duration: 3 data points"));
        assert!(doc.contains("- Shortest duration: 2 data points"));
    }

    #[test]
    fn test_no_intervals_notice() {
        let doc = render(&sample_report(Vec::new()));
        assert!(doc.contains("## No Zero-Value Intervals Found"));
        assert!(!doc.contains("## Interval Details"));
        assert!(!doc.contains("## Summary Statistics"));
    }

    #[test]
    fn test_pipe_in_cell_is_escaped() {
        let mut report = sample_report(Vec::new());
        report.preview[0][0] = "a|b".to_string();
        let doc = render(&report);
        assert!(doc.contains("a\\|b"));
    }
}
