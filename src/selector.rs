//! Target-column selection
//!
//! Reproduces the "second through fifth data column" policy: drop the time
//! and id columns, skip the first remaining column, then take a fixed-size
//! window. The window is configurable; four columns matches the sensor
//! layout this tool was written for.

use crate::error::{AnalysisError, Result};

/// Default number of data columns evaluated by the zero predicate
pub const DEFAULT_WINDOW_SIZE: usize = 4;

/// Select the columns the zero predicate will be applied to.
///
/// `time_column` and `id_column` are removed order-preserving; the first
/// remaining column is skipped; up to `window_size` of the rest are
/// returned. A short or empty result is valid; only an empty `all_columns`
/// is an error.
pub fn select_target_columns(
    all_columns: &[String],
    time_column: Option<&str>,
    id_column: Option<&str>,
    window_size: usize,
) -> Result<Vec<String>> {
    if all_columns.is_empty() {
        return Err(AnalysisError::Configuration(
            "input has no columns".to_string(),
        ));
    }

    let data_columns: Vec<&String> = all_columns
        .iter()
        .filter(|name| {
            Some(name.as_str()) != time_column && Some(name.as_str()) != id_column
        })
        .collect();

    Ok(data_columns
        .into_iter()
        .skip(1)
        .take(window_size)
        .cloned()
        .collect())
}
