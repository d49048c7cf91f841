//! Zero-run detection over a loaded table
//!
//! A single linear pass evaluates the per-row predicate ("every target
//! column equals zero") and merges consecutive true rows into maximal,
//! non-overlapping closed intervals. A run reaching the last row is flushed
//! after the loop. The comparison is exact equality; sensor readings are
//! assumed to be true zeros, not near-zero float noise.

use crate::error::{AnalysisError, Result};
use crate::table::Table;
use serde::Serialize;

/// A maximal contiguous row range where all target columns are zero
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZeroRunInterval {
    /// First row of the run (0-based, inclusive)
    pub start_row: usize,
    /// Last row of the run (0-based, inclusive)
    pub end_row: usize,
    /// Time-column value at `start_row` (row index when no time column)
    pub start_label: String,
    /// Time-column value at `end_row`
    pub end_label: String,
    /// Number of rows in the run
    pub length: usize,
}

/// Aggregate statistics over the detected intervals
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub interval_count: usize,
    /// Number of rows satisfying the predicate; equals the sum of interval
    /// lengths
    pub total_zero_rows: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_length: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
}

impl RunSummary {
    /// Derive the summary from an interval list.
    ///
    /// Aggregates are absent when there are no intervals.
    fn from_intervals(intervals: &[ZeroRunInterval], total_zero_rows: usize) -> Self {
        if intervals.is_empty() {
            return Self {
                interval_count: 0,
                total_zero_rows,
                average_length: None,
                max_length: None,
                min_length: None,
            };
        }

        let lengths: Vec<usize> = intervals.iter().map(|i| i.length).collect();
        let sum: usize = lengths.iter().sum();
        Self {
            interval_count: intervals.len(),
            total_zero_rows,
            average_length: Some(sum as f64 / intervals.len() as f64),
            max_length: lengths.iter().copied().max(),
            min_length: lengths.iter().copied().min(),
        }
    }
}

/// Scans tables for runs of all-zero target columns
#[derive(Debug, Clone)]
pub struct ZeroRunDetector {
    target_columns: Vec<String>,
    time_column: Option<String>,
}

impl ZeroRunDetector {
    /// Create a detector for a fixed set of target columns.
    ///
    /// `time_column` is used only for interval labels; row order itself is
    /// the time order.
    pub fn new(target_columns: Vec<String>, time_column: Option<String>) -> Self {
        Self {
            target_columns,
            time_column,
        }
    }

    pub fn target_columns(&self) -> &[String] {
        &self.target_columns
    }

    /// Find all maximal zero runs in `table`.
    ///
    /// Intervals come back in increasing `start_row` order, non-overlapping.
    /// Fails with a configuration error when the target set is empty or
    /// names a column the table does not have, and with a data-type error
    /// when a target cell cannot be compared to zero.
    pub fn find_zero_runs(&self, table: &Table) -> Result<(Vec<ZeroRunInterval>, RunSummary)> {
        let target_indices = self.resolve_target_indices(table)?;
        let time_index = match &self.time_column {
            Some(name) => Some(table.column_index(name).ok_or_else(|| {
                AnalysisError::Configuration(format!(
                    "time column '{}' not present in input",
                    name
                ))
            })?),
            None => None,
        };

        let mut intervals = Vec::new();
        let mut total_zero_rows = 0usize;
        let mut run_start: Option<usize> = None;

        for row in 0..table.row_count() {
            let zero = self.is_zero_row(table, row, &target_indices)?;
            if zero {
                total_zero_rows += 1;
            }
            match (zero, run_start) {
                (true, None) => run_start = Some(row),
                (false, Some(start)) => {
                    intervals.push(self.close_run(table, time_index, start, row - 1));
                    run_start = None;
                }
                _ => {}
            }
        }
        // A run may extend to the last row; flush it.
        if let Some(start) = run_start {
            intervals.push(self.close_run(table, time_index, start, table.row_count() - 1));
        }

        let summary = RunSummary::from_intervals(&intervals, total_zero_rows);
        Ok((intervals, summary))
    }

    /// Per-row predicate: every target column equals zero
    fn is_zero_row(&self, table: &Table, row: usize, target_indices: &[usize]) -> Result<bool> {
        for (&index, name) in target_indices.iter().zip(&self.target_columns) {
            let cell = table
                .cell(row, index)
                .expect("row/column indices validated before the scan");
            match cell.is_zero() {
                Some(true) => {}
                Some(false) => return Ok(false),
                None => {
                    return Err(AnalysisError::DataType {
                        row,
                        column: name.clone(),
                        value: cell.to_string(),
                    })
                }
            }
        }
        Ok(true)
    }

    fn close_run(
        &self,
        table: &Table,
        time_index: Option<usize>,
        start: usize,
        end: usize,
    ) -> ZeroRunInterval {
        ZeroRunInterval {
            start_row: start,
            end_row: end,
            start_label: row_label(table, time_index, start),
            end_label: row_label(table, time_index, end),
            length: end - start + 1,
        }
    }

    fn resolve_target_indices(&self, table: &Table) -> Result<Vec<usize>> {
        if self.target_columns.is_empty() {
            return Err(AnalysisError::Configuration(
                "no target columns selected".to_string(),
            ));
        }
        self.target_columns
            .iter()
            .map(|name| {
                table.column_index(name).ok_or_else(|| {
                    AnalysisError::Configuration(format!(
                        "target column '{}' not present in input",
                        name
                    ))
                })
            })
            .collect()
    }
}

/// Label for a row: the time-column value, or the row index without one
fn row_label(table: &Table, time_index: Option<usize>, row: usize) -> String {
    match time_index.and_then(|index| table.cell(row, index)) {
        Some(cell) => cell.to_string(),
        None => row.to_string(),
    }
}
