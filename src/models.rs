//! Review record and review table types.

use serde::{Deserialize, Serialize};

use crate::config::REVIEW_COLUMNS;

/// One normalized customer review.
///
/// Created once by the entry parser and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewRecord {
    /// Feed-assigned review id
    pub id: u64,
    /// Reviewer display name
    pub author: String,
    /// Review text (may be empty)
    pub content: String,
    /// Star rating, observed 1-5
    pub rating: u32,
    /// App version the review was written against
    pub version: String,
}

/// Ordered collection of review records with the fixed five-column schema.
///
/// Records keep the order they were appended in. Duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewTable {
    records: Vec<ReviewRecord>,
}

impl ReviewTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Column names, in export order.
    pub fn columns(&self) -> &'static [&'static str] {
        &REVIEW_COLUMNS
    }

    /// Appends one page worth of records after the existing ones.
    pub fn extend_from_page(&mut self, page: Vec<ReviewRecord>) {
        self.records.extend(page);
    }

    /// Records in insertion order.
    pub fn records(&self) -> &[ReviewRecord] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl From<Vec<ReviewRecord>> for ReviewTable {
    fn from(records: Vec<ReviewRecord>) -> Self {
        Self { records }
    }
}
