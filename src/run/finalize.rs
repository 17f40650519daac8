//! Run statistics reporting.

use log::{debug, info};
use strum::IntoEnumIterator;

use crate::error_handling::{PageOutcome, ProcessingStats};

/// Logs the page and entry counters of a finished collection.
///
/// The one-line total goes to `info`; the per-outcome breakdown and dropped
/// entries go to `debug`.
pub fn print_page_statistics(stats: &ProcessingStats, records: usize) {
    info!(
        "Collected {} review(s) from {} page(s) ({} without reviews)",
        records,
        stats.total_pages(),
        stats.empty_pages()
    );

    for outcome in PageOutcome::iter() {
        let count = stats.page_count(outcome);
        if count > 0 {
            debug!("   {}: {}", outcome.as_str(), count);
        }
    }

    let dropped = stats.dropped_entries();
    if dropped > 0 {
        debug!("   Malformed entries skipped: {}", dropped);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_page_statistics_empty() {
        // Should not panic with all-zero counters
        print_page_statistics(&ProcessingStats::new(), 0);
    }

    #[test]
    fn test_print_page_statistics_with_counts() {
        let stats = ProcessingStats::new();
        stats.record_page(PageOutcome::Populated);
        stats.record_page(PageOutcome::NonSuccessStatus);
        stats.record_dropped_entry();
        print_page_statistics(&stats, 3);
    }
}
