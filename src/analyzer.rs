//! Analysis orchestration
//!
//! Wires the collaborators together: load the table, resolve the time and
//! id columns, fix the target-column window, run the zero-run scan, and
//! assemble an immutable report. Rendering and writing happen after this
//! returns, so a failed run leaves no partial output behind.

use crate::columns;
use crate::detector::{RunSummary, ZeroRunDetector, ZeroRunInterval};
use crate::error::Result;
use crate::loader::{self, LoaderConfig};
use crate::selector::{self, DEFAULT_WINDOW_SIZE};
use serde::Serialize;
use std::path::PathBuf;

/// Default number of rows shown in the report's data overview
pub const DEFAULT_PREVIEW_ROWS: usize = 5;

/// All analysis parameterization, caller-supplied
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Input file (CSV or spreadsheet)
    pub input: PathBuf,
    /// Time column name; autodetected (or synthesized) when absent
    pub time_column: Option<String>,
    /// Row-identifier column name; autodetected when absent
    pub id_column: Option<String>,
    /// Number of data columns evaluated by the zero predicate
    pub window_size: usize,
    /// Rows shown in the report's data overview
    pub preview_rows: usize,
    pub loader: LoaderConfig,
}

impl AnalyzerConfig {
    pub fn new(input: PathBuf) -> Self {
        Self {
            input,
            time_column: None,
            id_column: None,
            window_size: DEFAULT_WINDOW_SIZE,
            preview_rows: DEFAULT_PREVIEW_ROWS,
            loader: LoaderConfig::default(),
        }
    }
}

/// A target column with its 1-based position in the full column list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TargetColumn {
    pub name: String,
    pub position: usize,
}

/// Everything the report renderers need, assembled once per run
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    /// Source file name as given
    pub source: String,
    /// Local generation timestamp, `YYYY-MM-DD HH:MM:SS`
    pub generated_at: String,
    /// (rows, columns) of the loaded table
    pub shape: (usize, usize),
    /// Column names in file order
    pub columns: Vec<String>,
    /// First rows of the table, cells rendered to text
    pub preview: Vec<Vec<String>>,
    /// Column used for interval labels
    pub time_column: String,
    pub target_columns: Vec<TargetColumn>,
    pub intervals: Vec<ZeroRunInterval>,
    pub summary: RunSummary,
}

/// Run the full analysis for `config`
pub fn analyze(config: &AnalyzerConfig) -> Result<AnalysisReport> {
    tracing::info!(input = %config.input.display(), "loading input");
    let mut table = loader::load_table(&config.input, &config.loader)?;

    let time_column = columns::resolve_time_column(&mut table, config.time_column.as_deref())?;
    let id_column = columns::resolve_id_column(&table, config.id_column.as_deref())?;
    tracing::debug!(time = %time_column, id = ?id_column, "resolved column roles");

    let targets = selector::select_target_columns(
        table.columns(),
        Some(&time_column),
        id_column.as_deref(),
        config.window_size,
    )?;
    tracing::info!(targets = ?targets, "scanning for zero runs");

    let detector = ZeroRunDetector::new(targets.clone(), Some(time_column.clone()));
    let (intervals, summary) = detector.find_zero_runs(&table)?;
    tracing::info!(
        intervals = summary.interval_count,
        zero_rows = summary.total_zero_rows,
        "scan complete"
    );

    let target_columns = targets
        .into_iter()
        .map(|name| {
            let position = table
                .column_index(&name)
                .expect("target columns validated against the table")
                + 1;
            TargetColumn { name, position }
        })
        .collect();

    let preview = (0..config.preview_rows.min(table.row_count()))
        .map(|row| {
            table
                .row(row)
                .expect("preview rows bounded by row_count")
                .iter()
                .map(|cell| cell.to_string())
                .collect()
        })
        .collect();

    Ok(AnalysisReport {
        source: config.input.display().to_string(),
        generated_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        shape: table.shape(),
        columns: table.columns().to_vec(),
        preview,
        time_column,
        target_columns,
        intervals,
        summary,
    })
}
