//! CLI argument parsing for zerospan

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for the analysis report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Markdown document (default)
    Markdown,
    /// Compact plain text for the terminal
    Text,
    /// JSON for machine parsing
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "zerospan")]
#[command(version)]
#[command(about = "Find intervals where sensor data columns are all zero", long_about = None)]
pub struct Cli {
    /// Input file (CSV or spreadsheet)
    pub input: PathBuf,

    /// Time column name (autodetected from headers when omitted)
    #[arg(short = 't', long = "time-column", value_name = "NAME")]
    pub time_column: Option<String>,

    /// Row-identifier column to exclude from analysis (autodetected when omitted)
    #[arg(long = "id-column", value_name = "NAME")]
    pub id_column: Option<String>,

    /// Number of data columns evaluated by the zero predicate
    #[arg(short = 'w', long = "window-size", value_name = "N", default_value = "4")]
    pub window_size: usize,

    /// Rows shown in the report's data overview
    #[arg(long = "preview-rows", value_name = "N", default_value = "5")]
    pub preview_rows: usize,

    /// Report format
    #[arg(long = "format", value_enum, default_value = "markdown")]
    pub format: ReportFormat,

    /// Write the report to this file instead of stdout
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Text encoding of delimited input (e.g. gbk); default is UTF-8 with GBK fallback
    #[arg(long = "encoding", value_name = "LABEL")]
    pub encoding: Option<String>,

    /// Field delimiter for delimited input
    #[arg(short = 'd', long = "delimiter", value_name = "CHAR", default_value = ",")]
    pub delimiter: char,

    /// Enable debug logging to stderr
    #[arg(long = "debug")]
    pub debug: bool,
}
