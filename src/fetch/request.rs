//! Feed request URL construction.

use crate::config::{FEED_RESPONSE_FORMAT, FEED_SORT_ORDER};

/// Builds the URL of one page of an app's customer review feed.
///
/// The layout is
/// `{base_url}/{country}/rss/customerreviews/id={app_id}/page={page}/sortby=mostrecent/json`.
/// Sort order and response format are fixed.
pub fn review_page_url(base_url: &str, country: &str, app_id: u64, page: u32) -> String {
    format!(
        "{}/{}/rss/customerreviews/id={}/page={}/sortby={}/{}",
        base_url.trim_end_matches('/'),
        country,
        app_id,
        page,
        FEED_SORT_ORDER,
        FEED_RESPONSE_FORMAT
    )
}
