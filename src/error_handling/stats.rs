//! Processing statistics tracking.
//!
//! Counts how each requested page ended and how many entries were dropped,
//! so the run summary can show what the exported row count alone hides.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::PageOutcome;

/// Page and entry counters for one export run.
///
/// All outcome types are initialized to zero on creation. Counters are atomic
/// so the tracker can be shared by reference across `.await` points.
pub struct ProcessingStats {
    pages: HashMap<PageOutcome, AtomicUsize>,
    dropped_entries: AtomicUsize,
}

impl ProcessingStats {
    /// Creates a tracker with every page outcome at zero.
    pub fn new() -> Self {
        let mut pages = HashMap::new();
        for outcome in PageOutcome::iter() {
            pages.insert(outcome, AtomicUsize::new(0));
        }

        ProcessingStats {
            pages,
            dropped_entries: AtomicUsize::new(0),
        }
    }

    /// Records how one page request ended.
    pub fn record_page(&self, outcome: PageOutcome) {
        if let Some(counter) = self.pages.get(&outcome) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to record page outcome {:?} which is not in the map. \
                 This indicates a bug in ProcessingStats initialization.",
                outcome
            );
        }
    }

    /// Records one malformed entry that was skipped.
    pub fn record_dropped_entry(&self) {
        self.dropped_entries.fetch_add(1, Ordering::Relaxed);
    }

    /// Get the count for a page outcome.
    ///
    /// Returns 0 if the outcome is not in the map (should never happen if properly initialized).
    pub fn page_count(&self, outcome: PageOutcome) -> usize {
        self.pages
            .get(&outcome)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Total number of page requests recorded.
    pub fn total_pages(&self) -> usize {
        self.pages.values().map(|c| c.load(Ordering::SeqCst)).sum()
    }

    /// Pages that contributed no records, whatever the reason.
    pub fn empty_pages(&self) -> usize {
        self.total_pages() - self.page_count(PageOutcome::Populated)
    }

    /// Malformed entries skipped so far.
    pub fn dropped_entries(&self) -> usize {
        self.dropped_entries.load(Ordering::SeqCst)
    }
}

impl Default for ProcessingStats {
    fn default() -> Self {
        Self::new()
    }
}
