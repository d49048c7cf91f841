//! Table loading from delimited text and spreadsheet files
//!
//! The format is chosen by file extension. CSV bytes are decoded before
//! parsing: an explicit encoding label wins, otherwise UTF-8 with a GBK
//! fallback (the sensor exports this tool was written for are GBK-encoded).
//! Column names come back in file order and rows keep the source record
//! order, which downstream treats as the time order.

use crate::error::{AnalysisError, Result};
use crate::table::{CellValue, Table};
use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;

/// Loader configuration, all caller-supplied
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Encoding label for delimited text (e.g. "gbk", "utf-8"); `None`
    /// means UTF-8 with GBK fallback
    pub encoding: Option<String>,
    /// Field delimiter for delimited text
    pub delimiter: u8,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            encoding: None,
            delimiter: b',',
        }
    }
}

const SPREADSHEET_EXTENSIONS: [&str; 5] = ["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// Load a table from `path`, dispatching on the file extension
pub fn load_table(path: &Path, config: &LoaderConfig) -> Result<Table> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    if SPREADSHEET_EXTENSIONS.contains(&extension.as_str()) {
        load_spreadsheet(path)
    } else {
        load_delimited(path, config)
    }
}

fn load_delimited(path: &Path, config: &LoaderConfig) -> Result<Table> {
    let raw = std::fs::read(path).map_err(|e| load_error(path, e.to_string()))?;
    let text = decode_bytes(&raw, config.encoding.as_deref(), path)?;

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(config.delimiter)
        .has_headers(true)
        .from_reader(text.as_bytes());

    let columns: Vec<String> = reader
        .headers()
        .map_err(|e| load_error(path, e.to_string()))?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        // The csv crate rejects ragged records here, keeping the table
        // invariant that every row matches the header width.
        let record = record.map_err(|e| load_error(path, e.to_string()))?;
        rows.push(record.iter().map(parse_field).collect());
    }

    tracing::debug!(rows = rows.len(), columns = columns.len(), "loaded delimited file");
    Table::new(columns, rows)
}

fn load_spreadsheet(path: &Path) -> Result<Table> {
    let mut workbook =
        open_workbook_auto(path).map_err(|e| load_error(path, e.to_string()))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| load_error(path, "workbook has no sheets".to_string()))?
        .map_err(|e| load_error(path, e.to_string()))?;

    let mut row_iter = range.rows();
    let columns: Vec<String> = match row_iter.next() {
        Some(header) => header.iter().map(|c| c.to_string().trim().to_string()).collect(),
        None => {
            return Err(load_error(path, "sheet has no header row".to_string()));
        }
    };

    let rows: Vec<Vec<CellValue>> = row_iter
        .map(|row| row.iter().map(convert_sheet_cell).collect())
        .collect();

    tracing::debug!(rows = rows.len(), columns = columns.len(), "loaded spreadsheet");
    Table::new(columns, rows)
}

/// Parse one delimited-text field into a cell value
fn parse_field(field: &str) -> CellValue {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        return CellValue::Empty;
    }
    if let Ok(i) = trimmed.parse::<i64>() {
        return CellValue::Integer(i);
    }
    if let Ok(f) = trimmed.parse::<f64>() {
        return CellValue::Float(f);
    }
    CellValue::Text(trimmed.to_string())
}

/// Convert a spreadsheet cell, reusing the text parsing rules so both
/// loaders agree on cell typing
fn convert_sheet_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::Int(i) => CellValue::Integer(*i),
        Data::Float(f) => CellValue::Float(*f),
        Data::Bool(b) => CellValue::Integer(i64::from(*b)),
        Data::String(s) => parse_field(s),
        other => CellValue::Text(other.to_string()),
    }
}

/// Decode raw bytes: explicit label, or UTF-8 with GBK fallback
fn decode_bytes(raw: &[u8], encoding_label: Option<&str>, path: &Path) -> Result<String> {
    if let Some(label) = encoding_label {
        let encoding = encoding_rs::Encoding::for_label(label.as_bytes())
            .ok_or_else(|| load_error(path, format!("unknown encoding '{}'", label)))?;
        let (text, _, had_errors) = encoding.decode(raw);
        if had_errors {
            return Err(load_error(path, format!("input is not valid {}", label)));
        }
        return Ok(text.into_owned());
    }

    let (text, _, had_errors) = encoding_rs::UTF_8.decode(raw);
    if !had_errors {
        return Ok(text.into_owned());
    }
    let (text, _, had_errors) = encoding_rs::GBK.decode(raw);
    if had_errors {
        return Err(load_error(
            path,
            "input is neither valid UTF-8 nor GBK".to_string(),
        ));
    }
    tracing::debug!("input is not UTF-8, decoded as GBK");
    Ok(text.into_owned())
}

fn load_error(path: &Path, reason: impl Into<String>) -> AnalysisError {
    AnalysisError::Load {
        path: path.display().to_string(),
        reason: reason.into(),
    }
}
