//! Review feed page fetching.
//!
//! One call to [`ReviewFeed::fetch_page`] issues exactly one GET request and
//! returns the reviews found on that page. A non-200 status, a feed without
//! entries, and a page whose entries are all malformed all come back as
//! `Ok(None)`; only transport failures and undecodable bodies are errors.

mod context;
mod request;
mod response;

use log::debug;
use serde_json::Value;

use crate::config::HTTP_STATUS_OK;
use crate::error_handling::{FetchError, PageOutcome, ProcessingStats};
use crate::models::ReviewRecord;

// Re-export public API
pub use context::ReviewFeed;
pub use request::review_page_url;
pub use response::{extract_reviews, ExtractedPage};

impl ReviewFeed {
    /// URL of one page of `app_id`'s review feed.
    pub fn page_url(&self, app_id: u64, page: u32) -> String {
        review_page_url(&self.base_url, &self.country, app_id, page)
    }

    /// Fetches one page of reviews.
    ///
    /// # Arguments
    ///
    /// * `app_id` - App Store id of the application
    /// * `page` - 1-based page number
    /// * `stats` - Page outcome and dropped entry counters
    ///
    /// # Returns
    ///
    /// `Ok(Some(records))` in feed order when at least one entry parsed, and
    /// `Ok(None)` otherwise.
    ///
    /// # Errors
    ///
    /// - `FetchError::Request` if the request or the body read fails
    /// - `FetchError::InvalidJson` if a 200 response body is not JSON
    /// - `FetchError::MissingFeed` if the JSON has no `feed` object
    pub async fn fetch_page(
        &self,
        app_id: u64,
        page: u32,
        stats: &ProcessingStats,
    ) -> Result<Option<Vec<ReviewRecord>>, FetchError> {
        let url = self.page_url(app_id, page);
        debug!("Requesting review page {}: {}", page, url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if status.as_u16() != HTTP_STATUS_OK {
            debug!("Page {} returned status {}, treating as empty", page, status);
            stats.record_page(PageOutcome::NonSuccessStatus);
            return Ok(None);
        }

        let body = response.text().await.map_err(|source| FetchError::Request {
            url: url.clone(),
            source,
        })?;
        let document: Value =
            serde_json::from_str(&body).map_err(|source| FetchError::InvalidJson {
                url: url.clone(),
                source,
            })?;
        let extracted = extract_reviews(&document).ok_or(FetchError::MissingFeed { url })?;

        for error in &extracted.dropped {
            debug!("Page {}: skipping malformed entry: {}", page, error);
            stats.record_dropped_entry();
        }
        let outcome = extracted.outcome();
        stats.record_page(outcome);
        debug!(
            "Page {}: {} review(s), {} dropped ({})",
            page,
            extracted.records.len(),
            extracted.dropped.len(),
            outcome
        );

        if extracted.records.is_empty() {
            Ok(None)
        } else {
            Ok(Some(extracted.records))
        }
    }
}
