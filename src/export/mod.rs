//! Export functionality for collected reviews.
//!
//! This module writes a `ReviewTable` to disk as CSV (the default) or JSONL.
//! Output is a pure function of the table, so exporting the same table twice
//! produces byte-identical files.

mod csv;
mod jsonl;
mod types;

use anyhow::Result;

use crate::models::ReviewTable;

pub use self::csv::{export_csv, write_csv};
pub use jsonl::{export_jsonl, write_jsonl};
pub use types::{ExportFormat, ExportOptions};

/// Exports `table` in the format and to the path given by `options`.
///
/// Any existing file at the output path is overwritten.
///
/// # Returns
///
/// Returns the number of records exported.
///
/// # Errors
///
/// Returns an error if the output file cannot be created or written.
pub fn export(table: &ReviewTable, options: &ExportOptions) -> Result<usize> {
    match options.format {
        ExportFormat::Csv => export_csv(table, &options.output),
        ExportFormat::Jsonl => export_jsonl(table, &options.output),
    }
}
