//! 趋势内容接口客户端测试

use chrono::NaiveDate;
use press_trending::domain::error::TrendError;
use press_trending::domain::traits::ContentSource;
use press_trending::infrastructure::config::ApiConfig;
use press_trending::infrastructure::network::client::decode_records;
use press_trending::infrastructure::network::{create_client, HttpContentSource};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn source_for(server: &MockServer, timeout_ms: u64) -> HttpContentSource {
    let api = ApiConfig {
        base_url: server.uri(),
        timeout_ms,
    };
    HttpContentSource::new(create_client(&api).unwrap(), format!("{}/", server.uri()))
}

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

#[test]
fn test_decode_null_and_empty_bodies() {
    assert!(decode_records(b"null").unwrap().is_empty());
    assert!(decode_records(b"").unwrap().is_empty());
    assert!(decode_records(b"  \n").unwrap().is_empty());
}

#[test]
fn test_decode_non_array_is_empty() {
    assert!(decode_records(br#"{"error":"nope"}"#).unwrap().is_empty());
    assert!(decode_records(b"42").unwrap().is_empty());
    assert!(decode_records(br#""text""#).unwrap().is_empty());
}

#[test]
fn test_decode_records() {
    let body = json!([
        {
            "content_id": "6f1c2a3e-7d2b-4c1f-9a8e-1b2c3d4e5f60",
            "title": "Lokalni izbori",
            "thumbnail": "/static/thumb.webp",
            "view_count": 120,
            "like_count": 7,
            "dislike_count": 1,
            "comment_count": 3,
            "published_at": "2026-10-19"
        },
        { "title": "Partial record" }
    ]);

    let records = decode_records(body.to_string().as_bytes()).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].title, "Lokalni izbori");
    assert_eq!(records[0].view_count, 120);
    assert_eq!(
        records[0].content_id.to_string(),
        "6f1c2a3e-7d2b-4c1f-9a8e-1b2c3d4e5f60"
    );
    assert_eq!(records[1].comment_count, 0);
}

#[test]
fn test_decode_tolerates_blank_ids_and_nulls() {
    let body = br#"[
        {"content_id": "", "title": "a"},
        {"content_id": "not-a-uuid", "title": "b", "thumbnail": null, "view_count": null, "is_deleted": null},
        {"title": null, "published_at": null, "comment_count": 4}
    ]"#;

    let records = decode_records(body).unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].content_id, "");
    assert_eq!(records[1].content_id, "not-a-uuid");
    assert_eq!(records[1].thumbnail, "");
    assert_eq!(records[1].view_count, 0);
    assert!(!records[1].is_deleted);
    assert_eq!(records[2].title, "");
    assert_eq!(records[2].comment_count, 4);
}

#[test]
fn test_decode_garbage_is_error() {
    assert!(matches!(
        decode_records(b"<html>login</html>"),
        Err(TrendError::Json(_))
    ));
    assert!(decode_records(br#"[{"view_count":"many"}]"#).is_err());
}

#[tokio::test]
async fn test_fetch_sends_query_params() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/admin/trending"))
        .and(query_param("published_at", "2026-10-19"))
        .and(query_param("limit", "12"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "title": "a" },
            { "title": "b" }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let source = source_for(&server, 1000);
    let records = source.fetch_trending(date(), 12).await.unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].title, "b");
}

#[tokio::test]
async fn test_fetch_null_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/admin/trending"))
        .respond_with(ResponseTemplate::new(200).set_body_string("null"))
        .mount(&server)
        .await;

    let source = source_for(&server, 1000);
    assert!(source.fetch_trending(date(), 24).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_fetch_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/admin/trending"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let source = source_for(&server, 1000);
    let err = source.fetch_trending(date(), 12).await.unwrap_err();
    assert!(matches!(err, TrendError::Api(_)));
    assert!(err.to_string().contains("500"));
}

#[tokio::test]
async fn test_fetch_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/admin/trending"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("[]")
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let source = source_for(&server, 50);
    let err = source.fetch_trending(date(), 12).await.unwrap_err();
    match err {
        TrendError::Http(e) => assert!(e.is_timeout()),
        other => panic!("expected timeout, got {other:?}"),
    }
}

#[test]
fn test_endpoint_trims_trailing_slash() {
    let client = create_client(&ApiConfig::default()).unwrap();
    let source = HttpContentSource::new(client, "http://press.local/");
    assert_eq!(source.endpoint(), "http://press.local/api/admin/trending");
}
