//! Column-role heuristics for loaded tables
//!
//! Guesses which column carries the timestamp and which is a running row
//! identifier, by header name. Both guesses can be overridden from the CLI;
//! when no time column exists at all, a monotonically increasing row-index
//! surrogate is appended so downstream labeling always has something to
//! point at.

use crate::error::{AnalysisError, Result};
use crate::table::Table;

/// Name given to the synthesized time-surrogate column
pub const ROW_INDEX_COLUMN: &str = "row_index";

const TIME_NAME_HINTS: [&str; 4] = ["time", "date", "timestamp", "datetime"];
const ID_NAME_HINTS: [&str; 4] = ["id", "no", "index", "seq"];

/// Guess the time column: first header whose lowercased name contains a
/// time-like hint.
pub fn detect_time_column(columns: &[String]) -> Option<String> {
    columns
        .iter()
        .find(|name| {
            let lower = name.to_lowercase();
            TIME_NAME_HINTS.iter().any(|hint| lower.contains(hint))
        })
        .cloned()
}

/// Guess the row-identifier column: first header that is exactly an id-like
/// name or ends in `_id`.
pub fn detect_id_column(columns: &[String]) -> Option<String> {
    columns
        .iter()
        .find(|name| {
            let lower = name.to_lowercase();
            ID_NAME_HINTS.contains(&lower.as_str()) || lower.ends_with("_id")
        })
        .cloned()
}

/// Resolve the time column for a table, synthesizing one if needed.
///
/// A configured name must exist in the table. Without a configured name the
/// header heuristic runs first; if it finds nothing, a `row_index` column is
/// appended and used as the time surrogate.
pub fn resolve_time_column(table: &mut Table, configured: Option<&str>) -> Result<String> {
    if let Some(name) = configured {
        if table.column_index(name).is_none() {
            return Err(AnalysisError::Configuration(format!(
                "time column '{}' not present in input",
                name
            )));
        }
        return Ok(name.to_string());
    }

    if let Some(name) = detect_time_column(table.columns()) {
        return Ok(name);
    }

    tracing::debug!("no time column detected, synthesizing '{ROW_INDEX_COLUMN}'");
    table.push_index_column(ROW_INDEX_COLUMN);
    Ok(ROW_INDEX_COLUMN.to_string())
}

/// Resolve the id column: a configured name must exist; otherwise fall back
/// to the header heuristic. `None` is a valid outcome.
pub fn resolve_id_column(table: &Table, configured: Option<&str>) -> Result<Option<String>> {
    if let Some(name) = configured {
        if table.column_index(name).is_none() {
            return Err(AnalysisError::Configuration(format!(
                "id column '{}' not present in input",
                name
            )));
        }
        return Ok(Some(name.to_string()));
    }
    Ok(detect_id_column(table.columns()))
}
