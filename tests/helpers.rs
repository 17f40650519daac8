// Shared test helpers for building feed responses and mock servers.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::path::Path;

use app_reviews::fetch::ReviewFeed;
use app_reviews::{Config, ExportFormat, LogFormat, LogLevel};
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// App id used by tests that do not care about the value.
#[allow(dead_code)]
pub const TEST_APP_ID: u64 = 1065803457;

/// Builds one well-formed feed entry, shaped like the real feed.
#[allow(dead_code)]
pub fn review_entry(id: u64, author: &str, content: &str, rating: u32, version: &str) -> Value {
    json!({
        "author": {
            "uri": {"label": format!("https://itunes.apple.com/ru/reviews/id{}", id)},
            "name": {"label": author},
            "label": ""
        },
        "im:version": {"label": version},
        "im:rating": {"label": rating.to_string()},
        "id": {"label": id.to_string()},
        "title": {"label": "title"},
        "content": {"label": content, "attributes": {"type": "text"}},
        "link": {"attributes": {"rel": "related", "href": "https://itunes.apple.com/ru/review"}},
        "im:voteSum": {"label": "0"},
        "im:contentType": {"attributes": {"term": "Application", "label": "Приложение"}},
        "im:voteCount": {"label": "0"}
    })
}

/// Builds an entry with no `im:rating`, which the parser must reject.
#[allow(dead_code)]
pub fn malformed_entry(id: u64) -> Value {
    let mut entry = review_entry(id, "broken", "no rating here", 1, "1.0");
    entry
        .as_object_mut()
        .expect("entry is an object")
        .remove("im:rating");
    entry
}

/// Wraps entries in the feed envelope.
#[allow(dead_code)]
pub fn feed_body(entries: Vec<Value>) -> Value {
    json!({
        "feed": {
            "author": {"name": {"label": "iTunes Store"}},
            "entry": entries,
            "updated": {"label": "2024-01-01T00:00:00-07:00"}
        }
    })
}

/// Feed envelope without an `entry` key, as returned past the last page.
#[allow(dead_code)]
pub fn empty_feed_body() -> Value {
    json!({"feed": {"author": {"name": {"label": "iTunes Store"}}}})
}

/// Request path of one feed page on the mock server.
#[allow(dead_code)]
pub fn page_path(country: &str, app_id: u64, page: u32) -> String {
    format!(
        "/{}/rss/customerreviews/id={}/page={}/sortby=mostrecent/json",
        country, app_id, page
    )
}

/// Mounts a response for one page of `TEST_APP_ID` in the `RU` storefront.
#[allow(dead_code)]
pub async fn mount_page(server: &MockServer, page: u32, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(page_path("RU", TEST_APP_ID, page)))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}

/// A `ReviewFeed` pointed at the mock server, `RU` storefront.
#[allow(dead_code)]
pub fn test_feed(server: &MockServer) -> ReviewFeed {
    ReviewFeed::new(reqwest::Client::new(), server.uri(), "RU")
}

/// A `Config` that reads from the mock server and writes into `output_dir`.
#[allow(dead_code)]
pub fn test_config(server: &MockServer, output_dir: &Path, max_pages: u32) -> Config {
    Config {
        app_id: TEST_APP_ID,
        max_pages,
        country: "RU".to_string(),
        feed_base_url: server.uri(),
        output_dir: output_dir.to_path_buf(),
        format: ExportFormat::Csv,
        timeout_seconds: Some(5),
        user_agent: None,
        log_level: LogLevel::Error, // Reduce noise in tests
        log_format: LogFormat::Plain,
    }
}
