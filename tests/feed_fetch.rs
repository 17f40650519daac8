//! Tests for single-page feed fetching against a mock feed server.

use app_reviews::error_handling::{FetchError, PageOutcome, ProcessingStats};
use app_reviews::fetch::ReviewFeed;
use serde_json::json;
use wiremock::{MockServer, ResponseTemplate};

#[path = "helpers.rs"]
mod helpers;

use helpers::{
    empty_feed_body, feed_body, malformed_entry, mount_page, review_entry, test_feed,
    TEST_APP_ID,
};

#[tokio::test]
async fn test_fetch_page_returns_records_in_feed_order() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        1,
        ResponseTemplate::new(200).set_body_json(feed_body(vec![
            review_entry(30, "c", "third", 3, "2.0"),
            review_entry(10, "a", "first", 5, "2.0"),
            review_entry(20, "b", "second", 1, "1.9"),
        ])),
    )
    .await;

    let stats = ProcessingStats::new();
    let records = test_feed(&server)
        .fetch_page(TEST_APP_ID, 1, &stats)
        .await
        .expect("fetch should succeed")
        .expect("page has reviews");

    let ids: Vec<u64> = records.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![30, 10, 20]);
    assert_eq!(records[2].author, "b");
    assert_eq!(records[2].content, "second");
    assert_eq!(records[2].rating, 1);
    assert_eq!(records[2].version, "1.9");
    assert_eq!(stats.page_count(PageOutcome::Populated), 1);
}

#[tokio::test]
async fn test_fetch_page_non_200_is_empty() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        1,
        ResponseTemplate::new(503).set_body_json(feed_body(vec![review_entry(
            1, "a", "ignored", 5, "1.0",
        )])),
    )
    .await;

    let stats = ProcessingStats::new();
    let result = test_feed(&server)
        .fetch_page(TEST_APP_ID, 1, &stats)
        .await
        .expect("non-200 is not an error");

    assert!(result.is_none());
    assert_eq!(stats.page_count(PageOutcome::NonSuccessStatus), 1);
}

#[tokio::test]
async fn test_fetch_page_unmatched_path_404_is_empty() {
    // No mock mounted: the server answers 404
    let server = MockServer::start().await;
    let stats = ProcessingStats::new();
    let result = test_feed(&server)
        .fetch_page(TEST_APP_ID, 4, &stats)
        .await
        .expect("404 is not an error");
    assert!(result.is_none());
}

#[tokio::test]
async fn test_fetch_page_without_entries_is_empty() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        2,
        ResponseTemplate::new(200).set_body_json(empty_feed_body()),
    )
    .await;

    let stats = ProcessingStats::new();
    let result = test_feed(&server)
        .fetch_page(TEST_APP_ID, 2, &stats)
        .await
        .expect("fetch should succeed");

    assert!(result.is_none());
    assert_eq!(stats.page_count(PageOutcome::NoEntries), 1);
}

#[tokio::test]
async fn test_fetch_page_skips_malformed_entries() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        1,
        ResponseTemplate::new(200).set_body_json(feed_body(vec![
            review_entry(1, "a", "ok", 4, "1.0"),
            malformed_entry(2),
            review_entry(3, "c", "also ok", 2, "1.0"),
        ])),
    )
    .await;

    let stats = ProcessingStats::new();
    let records = test_feed(&server)
        .fetch_page(TEST_APP_ID, 1, &stats)
        .await
        .unwrap()
        .expect("valid entries remain");

    let ids: Vec<u64> = records.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 3]);
    assert_eq!(stats.dropped_entries(), 1);
}

#[tokio::test]
async fn test_fetch_page_all_malformed_is_empty() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        1,
        ResponseTemplate::new(200)
            .set_body_json(feed_body(vec![malformed_entry(1), malformed_entry(2)])),
    )
    .await;

    let stats = ProcessingStats::new();
    let result = test_feed(&server)
        .fetch_page(TEST_APP_ID, 1, &stats)
        .await
        .unwrap();

    assert!(result.is_none());
    assert_eq!(stats.page_count(PageOutcome::AllEntriesMalformed), 1);
    assert_eq!(stats.dropped_entries(), 2);
}

#[tokio::test]
async fn test_fetch_page_single_object_entry() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        1,
        ResponseTemplate::new(200).set_body_json(json!({
            "feed": {"entry": review_entry(77, "solo", "only one", 5, "3.1")}
        })),
    )
    .await;

    let stats = ProcessingStats::new();
    let records = test_feed(&server)
        .fetch_page(TEST_APP_ID, 1, &stats)
        .await
        .unwrap()
        .expect("single entry page");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, 77);
}

#[tokio::test]
async fn test_fetch_page_invalid_json_is_error() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        1,
        ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"),
    )
    .await;

    let stats = ProcessingStats::new();
    let err = test_feed(&server)
        .fetch_page(TEST_APP_ID, 1, &stats)
        .await
        .expect_err("HTML body should fail");
    assert!(matches!(err, FetchError::InvalidJson { .. }));
}

#[tokio::test]
async fn test_fetch_page_missing_feed_is_error() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        1,
        ResponseTemplate::new(200).set_body_json(json!({"entry": []})),
    )
    .await;

    let stats = ProcessingStats::new();
    let err = test_feed(&server)
        .fetch_page(TEST_APP_ID, 1, &stats)
        .await
        .expect_err("missing feed should fail");
    match err {
        FetchError::MissingFeed { url } => {
            assert!(url.ends_with("/RU/rss/customerreviews/id=1065803457/page=1/sortby=mostrecent/json"))
        }
        other => panic!("expected MissingFeed, got {:?}", other),
    }
}

#[tokio::test]
async fn test_fetch_page_connection_failure_is_error() {
    // Reserve a free port, then release it so connections are refused
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let feed = ReviewFeed::new(
        reqwest::Client::new(),
        format!("http://127.0.0.1:{}", port),
        "RU",
    );
    let stats = ProcessingStats::new();
    let err = feed
        .fetch_page(TEST_APP_ID, 1, &stats)
        .await
        .expect_err("closed port should fail");
    assert!(matches!(err, FetchError::Request { .. }));
    assert_eq!(stats.total_pages(), 0);
}
