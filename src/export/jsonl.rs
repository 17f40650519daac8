//! JSONL export functionality.
//!
//! Each line is one review serialized as a JSON object with the keys `id`,
//! `author`, `content`, `rating` and `version`, in table order.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::models::ReviewTable;

/// Writes `table` as JSON Lines to `writer`.
///
/// # Returns
///
/// Returns the number of records written.
pub fn write_jsonl<W: Write>(table: &ReviewTable, writer: W) -> Result<usize> {
    let mut writer = BufWriter::new(writer);
    let mut record_count = 0;

    for review in table.records() {
        serde_json::to_writer(&mut writer, review)
            .with_context(|| format!("Failed to serialize review {}", review.id))?;
        writer.write_all(b"\n")?;
        record_count += 1;
    }

    writer.flush().context("Failed to flush JSONL output")?;
    Ok(record_count)
}

/// Exports `table` to a JSONL file at `output`, replacing any existing file.
pub fn export_jsonl(table: &ReviewTable, output: &Path) -> Result<usize> {
    let file = File::create(output)
        .with_context(|| format!("Failed to create output file: {}", output.display()))?;
    write_jsonl(table, file).with_context(|| format!("Failed to write {}", output.display()))
}
