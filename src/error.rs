//! Error taxonomy for the analysis pipeline
//!
//! Three categories: bad column configuration, cells that cannot be compared
//! to zero, and input files the loader could not read. The core performs no
//! recovery; every error aborts the run and carries enough context (row,
//! column, path) to diagnose.

use thiserror::Error;

/// Errors produced while loading a table or scanning it for zero runs
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Bad or missing column specification
    #[error("invalid column configuration: {0}")]
    Configuration(String),

    /// A target cell whose value cannot be compared to zero
    #[error("row {row}, column '{column}': value '{value}' cannot be compared to zero")]
    DataType {
        row: usize,
        column: String,
        value: String,
    },

    /// The input collaborator failed to read or parse the source file
    #[error("failed to load '{path}': {reason}")]
    Load { path: String, reason: String },
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
