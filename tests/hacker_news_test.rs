//! Wiremock integration tests for HackerNewsClient.
//!
//! These tests verify correct HTTP interaction and error handling using mocked responses.
#![cfg(feature = "hacker-news")]

use quiet_hn::providers::HackerNewsClient;
use quiet_hn::{ItemSource, Limit, QuietHn, QuietHnError};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Test the ranked id listing.
#[tokio::test]
async fn test_top_items_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/topstories.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([9, 5, 3])))
        .mount(&mock_server)
        .await;

    let client = HackerNewsClient::with_base_url(mock_server.uri());
    let ids = client.top_items().await.expect("listing should succeed");
    assert_eq!(ids, vec![9, 5, 3]);
}

/// Test fetching a single item.
#[tokio::test]
async fn test_item_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/item/8863.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "by": "dhouston",
            "descendants": 71,
            "id": 8863,
            "score": 111,
            "time": 1175714200,
            "title": "My YC app: Dropbox - Throw away your USB drive",
            "type": "story",
            "url": "http://www.getdropbox.com/u/2/screencast.html"
        })))
        .mount(&mock_server)
        .await;

    let client = HackerNewsClient::with_base_url(mock_server.uri());
    let item = client.item(8863).await.expect("item should succeed");
    assert_eq!(item.id, 8863);
    assert_eq!(item.kind, "story");
    assert_eq!(item.by, "dhouston");
    assert_eq!(item.score, 111);
}

/// A `null` body means the item does not exist.
#[tokio::test]
async fn test_null_item_is_empty_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/item/1.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("null"))
        .mount(&mock_server)
        .await;

    let client = HackerNewsClient::with_base_url(mock_server.uri());
    let result = client.item(1).await;
    assert!(matches!(result, Err(QuietHnError::EmptyResponse)));
}

/// Non-2xx statuses become API errors.
#[tokio::test]
async fn test_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/topstories.json"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let client = HackerNewsClient::with_base_url(mock_server.uri());
    match client.top_items().await {
        Err(QuietHnError::Api { status, .. }) => assert_eq!(status, 500),
        other => panic!("expected Api error, got {other:?}"),
    }
}

/// Bodies that are not the expected JSON fail to decode.
#[tokio::test]
async fn test_malformed_listing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/topstories.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>nope</html>"))
        .mount(&mock_server)
        .await;

    let client = HackerNewsClient::with_base_url(mock_server.uri());
    assert!(matches!(
        client.top_items().await,
        Err(QuietHnError::Json(_))
    ));
}

/// An item body of the wrong shape is a decode error, not a missing item.
#[tokio::test]
async fn test_malformed_item() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/item/7.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "seven", "type": "story"
        })))
        .mount(&mock_server)
        .await;

    let client = HackerNewsClient::with_base_url(mock_server.uri());
    assert!(matches!(client.item(7).await, Err(QuietHnError::Json(_))));
}

/// Connection failures are transport errors.
#[tokio::test]
async fn test_unreachable_upstream() {
    // Nothing listens on port 9 (discard) on the test host.
    let client = HackerNewsClient::with_base_url("http://127.0.0.1:9");
    assert!(matches!(
        client.top_items().await,
        Err(QuietHnError::Http(_))
    ));
}

/// Trailing slashes in the base URL are tolerated.
#[tokio::test]
async fn test_trailing_slash_base_url() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/topstories.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([1])))
        .mount(&mock_server)
        .await;

    let client = HackerNewsClient::with_base_url(format!("{}/", mock_server.uri()));
    assert_eq!(client.top_items().await.unwrap(), vec![1]);
}

/// Full pipeline over HTTP: failing items and non-stories are skipped.
#[tokio::test]
async fn test_front_page_over_http() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/topstories.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([1, 2, 3, 4])))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/item/1.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 1, "type": "story", "title": "one", "url": "https://www.one.example/"
        })))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/item/2.json"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/item/3.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 3, "type": "job", "title": "hiring", "url": "https://jobs.example/"
        })))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/item/4.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 4, "type": "story", "title": "four", "url": "http://four.example/x"
        })))
        .mount(&mock_server)
        .await;

    let front_page = QuietHn::builder()
        .hacker_news_url(mock_server.uri())
        .num_stories(Limit::Unbounded)
        .build()
        .unwrap();

    let view = front_page.load().await.unwrap();
    let stories: Vec<_> = view
        .stories
        .iter()
        .map(|s| (s.id(), s.host().to_string()))
        .collect();
    assert_eq!(
        stories,
        vec![(4, "four.example".to_string()), (1, "one.example".to_string())]
    );
}
