//! Configuration constants.
//!
//! This module defines the defaults used when no CLI flag overrides them, plus
//! the fixed pieces of the review feed URL and the export schema.

/// App Store id of the application whose reviews are exported by default.
pub const DEFAULT_APP_ID: u64 = 1_065_803_457;

/// Number of feed pages requested by default (pages `1..=10`).
pub const DEFAULT_MAX_PAGES: u32 = 10;

/// Storefront country code inserted into the feed URL.
pub const DEFAULT_COUNTRY: &str = "RU";

/// Scheme and host of the review syndication feed.
pub const DEFAULT_FEED_BASE_URL: &str = "https://itunes.apple.com";

/// Directory the export file is written into.
pub const DEFAULT_OUTPUT_DIR: &str = ".";

// Fixed feed URL segments
/// Sort order requested from the feed (newest reviews first)
pub const FEED_SORT_ORDER: &str = "mostrecent";
/// Response format requested from the feed
pub const FEED_RESPONSE_FORMAT: &str = "json";

/// The only status treated as a successful page response
pub const HTTP_STATUS_OK: u16 = 200;

/// Column names of the review table, in export order.
///
/// The CSV export prefixes these with an unnamed row-index column.
pub const REVIEW_COLUMNS: [&str; 5] = ["id", "author", "content", "rating", "version"];
