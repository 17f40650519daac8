//! Review extraction from a decoded feed document.

use std::slice;

use serde_json::Value;

use crate::error_handling::{EntryError, PageOutcome};
use crate::models::ReviewRecord;
use crate::parse::parse_entry;

/// Reviews extracted from one feed page, plus the entries that failed to parse.
#[derive(Debug, Default)]
pub struct ExtractedPage {
    /// Parsed reviews, in feed order
    pub records: Vec<ReviewRecord>,
    /// Parse errors of the entries that were skipped
    pub dropped: Vec<EntryError>,
}

impl ExtractedPage {
    /// Classifies the page for statistics. Never `NonSuccessStatus`.
    pub fn outcome(&self) -> PageOutcome {
        if !self.records.is_empty() {
            PageOutcome::Populated
        } else if !self.dropped.is_empty() {
            PageOutcome::AllEntriesMalformed
        } else {
            PageOutcome::NoEntries
        }
    }
}

/// Extracts review records from a feed document.
///
/// Reads `feed.entry`. An absent or `null` entry list is empty; a single
/// object in place of the list counts as one entry. Entries that fail to
/// parse are collected in `dropped` and do not affect their siblings.
///
/// Returns `None` if the document has no `feed` object.
pub fn extract_reviews(document: &Value) -> Option<ExtractedPage> {
    let feed = document.get("feed").filter(|feed| feed.is_object())?;

    let entries: &[Value] = match feed.get("entry") {
        None | Some(Value::Null) => &[],
        Some(Value::Array(list)) => list,
        Some(single) => slice::from_ref(single),
    };

    let mut page = ExtractedPage::default();
    for entry in entries {
        match parse_entry(entry) {
            Ok(record) => page.records.push(record),
            Err(e) => page.dropped.push(e),
        }
    }
    Some(page)
}
