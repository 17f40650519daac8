//! Export types and options.

use std::path::PathBuf;

use clap::ValueEnum;

/// Export format options.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV with a leading row-index column (default)
    Csv,
    /// JSONL format (one JSON object per review)
    Jsonl,
}

impl ExportFormat {
    /// File extension used for this format, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Jsonl => "jsonl",
        }
    }
}

/// Options for exporting data.
#[derive(Clone, Debug)]
pub struct ExportOptions {
    /// Output file path (created or overwritten)
    pub output: PathBuf,
    /// Export format
    pub format: ExportFormat,
}
