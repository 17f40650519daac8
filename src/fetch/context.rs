//! Feed context for page fetching.
//!
//! This module defines the `ReviewFeed` struct that groups the HTTP client and
//! the feed location, so page fetches only need the app id and page number.

use crate::config::Config;

/// Location of a review feed plus the client used to read it.
#[derive(Clone, Debug)]
pub struct ReviewFeed {
    /// HTTP client for making requests
    pub client: reqwest::Client,
    /// Scheme and host of the feed, without a trailing slash
    pub base_url: String,
    /// Storefront country code
    pub country: String,
}

impl ReviewFeed {
    /// Creates a new `ReviewFeed`. A trailing `/` on `base_url` is dropped.
    pub fn new(
        client: reqwest::Client,
        base_url: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client,
            base_url,
            country: country.into(),
        }
    }

    /// Creates a `ReviewFeed` from the feed settings in `config`.
    pub fn from_config(client: reqwest::Client, config: &Config) -> Self {
        Self::new(client, config.feed_base_url.clone(), config.country.clone())
    }
}
