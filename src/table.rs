//! In-memory table model for time-ordered sensor readings
//!
//! Rows are stored in source-file order; that order is the authoritative
//! time order. All rows share the table's column set.

use crate::error::{AnalysisError, Result};
use serde::Serialize;
use std::fmt;

/// A single cell value as parsed by the loader
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Integer(i64),
    Float(f64),
    Text(String),
    Empty,
}

impl CellValue {
    /// Exact-equality zero predicate for one cell.
    ///
    /// Integers and floats compare against zero with no tolerance; text and
    /// empty cells are not comparable and produce an error at the caller's
    /// row/column position.
    pub fn is_zero(&self) -> Option<bool> {
        match self {
            CellValue::Integer(i) => Some(*i == 0),
            CellValue::Float(f) => Some(*f == 0.0),
            CellValue::Text(_) | CellValue::Empty => None,
        }
    }

    /// Whether this cell holds a numeric value
    pub fn is_numeric(&self) -> bool {
        matches!(self, CellValue::Integer(_) | CellValue::Float(_))
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Integer(i) => write!(f, "{}", i),
            CellValue::Float(v) => write!(f, "{}", v),
            CellValue::Text(s) => write!(f, "{}", s),
            CellValue::Empty => Ok(()),
        }
    }
}

/// An ordered table of rows, each row aligned with `columns`
#[derive(Debug, Clone, Default)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl Table {
    /// Create a table from a column list and row-major cell data.
    ///
    /// Every row must have exactly one cell per column.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<CellValue>>) -> Result<Self> {
        for (i, row) in rows.iter().enumerate() {
            if row.len() != columns.len() {
                return Err(AnalysisError::Configuration(format!(
                    "row {} has {} cells, expected {}",
                    i,
                    row.len(),
                    columns.len()
                )));
            }
        }
        Ok(Self { columns, rows })
    }

    /// Column names in source-file order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// (rows, columns)
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.columns.len())
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of a column by name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Cell at (row, column index)
    pub fn cell(&self, row: usize, column: usize) -> Option<&CellValue> {
        self.rows.get(row).and_then(|r| r.get(column))
    }

    /// One full row of cells
    pub fn row(&self, row: usize) -> Option<&[CellValue]> {
        self.rows.get(row).map(Vec::as_slice)
    }

    /// Append a column holding the row index (0..rows) as an integer.
    ///
    /// Used to synthesize a time surrogate when the source has no usable
    /// time column.
    pub fn push_index_column(&mut self, name: &str) {
        self.columns.push(name.to_string());
        for (i, row) in self.rows.iter_mut().enumerate() {
            row.push(CellValue::Integer(i as i64));
        }
    }
}
