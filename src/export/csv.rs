//! CSV export functionality.
//!
//! Writes the review table as comma-separated text: a header row with an
//! unnamed index column followed by the five review columns, then one row per
//! review prefixed with its 0-based position.

use anyhow::{Context, Result};
use csv::{Terminator, WriterBuilder};
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::models::ReviewTable;

/// Writes `table` as CSV to `writer`.
///
/// Lines end in `\n`. Fields are quoted only when they contain a comma, a
/// quote, or a line break.
///
/// # Returns
///
/// Returns the number of data rows written (the header is not counted).
pub fn write_csv<W: Write>(table: &ReviewTable, writer: W) -> Result<usize> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    // Write CSV header (the index column has no name)
    let mut header = vec![""];
    header.extend_from_slice(table.columns());
    writer
        .write_record(&header)
        .context("Failed to write CSV header")?;

    let mut record_count = 0;
    for (index, review) in table.records().iter().enumerate() {
        writer
            .write_record([
                index.to_string().as_str(),
                review.id.to_string().as_str(),
                review.author.as_str(),
                review.content.as_str(),
                review.rating.to_string().as_str(),
                review.version.as_str(),
            ])
            .with_context(|| format!("Failed to write CSV row {}", index))?;
        record_count += 1;
    }

    writer.flush().context("Failed to flush CSV output")?;
    Ok(record_count)
}

/// Exports `table` to a CSV file at `output`, replacing any existing file.
///
/// # Returns
///
/// Returns the number of records exported, or an error if the file cannot be
/// created or written.
pub fn export_csv(table: &ReviewTable, output: &Path) -> Result<usize> {
    let file = File::create(output)
        .with_context(|| format!("Failed to create output file: {}", output.display()))?;
    write_csv(table, file).with_context(|| format!("Failed to write {}", output.display()))
}
