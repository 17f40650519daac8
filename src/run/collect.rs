//! Page-by-page review collection.

use log::debug;

use crate::error_handling::{FetchError, ProcessingStats};
use crate::fetch::ReviewFeed;
use crate::models::ReviewTable;

/// Fetches pages `1..=max_pages` of `app_id`'s feed and concatenates their reviews.
///
/// Pages are requested one at a time in increasing order, and every page is
/// requested even after empty ones, since the feed can have gaps. Records keep
/// page order, then feed order within a page.
///
/// # Returns
///
/// The collected table, possibly empty. `max_pages == 0` makes no requests.
///
/// # Errors
///
/// Returns the first `FetchError`; records collected before it are discarded.
pub async fn collect_reviews(
    feed: &ReviewFeed,
    app_id: u64,
    max_pages: u32,
    stats: &ProcessingStats,
) -> Result<ReviewTable, FetchError> {
    let mut table = ReviewTable::new();

    for page in 1..=max_pages {
        match feed.fetch_page(app_id, page, stats).await? {
            Some(records) => {
                debug!("Page {}/{}: collected {} review(s)", page, max_pages, records.len());
                table.extend_from_page(records);
            }
            None => debug!("Page {}/{}: no reviews", page, max_pages),
        }
    }

    Ok(table)
}
