//! JSON report rendering for machine parsing
//!
//! The report model derives `Serialize`; this module fixes the document
//! shape (a top-level object with a format marker) so downstream consumers
//! can detect schema changes.

use crate::analyzer::AnalysisReport;
use serde::Serialize;

/// Document schema version
const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Serialize)]
struct JsonDocument<'a> {
    format_version: u32,
    #[serde(flatten)]
    report: &'a AnalysisReport,
}

/// Render the report as pretty-printed JSON
pub fn render(report: &AnalysisReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonDocument {
        format_version: FORMAT_VERSION,
        report,
    })
}
