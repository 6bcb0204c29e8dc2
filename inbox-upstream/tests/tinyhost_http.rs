//! Integration tests: `TinyhostClient` against an in-process mock of the
//! Tinyhost listing API.

use axum::{
    extract::{Path, RawQuery},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use inbox_core::MailboxQuery;
use inbox_upstream::{MailboxApi, TinyhostClient, UpstreamConfig, UpstreamError};
use serde_json::json;

async fn listing(
    Path((domain, user)): Path<(String, String)>,
    RawQuery(query): RawQuery,
) -> axum::response::Response {
    match user.as_str() {
        "missing" => (StatusCode::NOT_FOUND, "mailbox not found").into_response(),
        "garbled" => (StatusCode::OK, "<html>not json</html>").into_response(),
        _ => Json(json!({
            "emails": [{"id": 1, "subject": "hi", "sender": "x@y"}],
            "echo": {"domain": domain, "user": user, "query": query}
        }))
        .into_response(),
    }
}

/// Serve the mock on an ephemeral port and return its base URL.
async fn spawn_mock() -> String {
    let app = Router::new().route("/api/email/{domain}/{user}/", get(listing));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock upstream");
    let addr = listener.local_addr().expect("mock address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("mock upstream crashed");
    });
    format!("http://{addr}")
}

fn client(base: &str) -> TinyhostClient {
    TinyhostClient::new(UpstreamConfig::new(base).expect("valid base URL"))
}

fn query(email: &str) -> MailboxQuery {
    MailboxQuery::new(email, 1, 10).expect("valid query")
}

#[tokio::test]
async fn success_body_is_returned_untouched() {
    let base = spawn_mock().await;
    let body = client(&base)
        .list_emails(&query("some user@tinyhost.shop"))
        .await
        .expect("listing should succeed");

    assert_eq!(body["emails"][0]["subject"], "hi");
    assert_eq!(body["echo"]["domain"], "tinyhost.shop");
    assert_eq!(body["echo"]["user"], "some user", "segment must decode back");
    assert_eq!(body["echo"]["query"], "page=1&limit=10");
}

#[tokio::test]
async fn non_success_status_carries_raw_body() {
    let base = spawn_mock().await;
    let err = client(&base)
        .list_emails(&query("missing@tinyhost.shop"))
        .await
        .expect_err("404 must be an error");

    match err {
        UpstreamError::Status { status, body } => {
            assert_eq!(status, 404);
            assert_eq!(body, "mailbox not found");
        }
        other => panic!("expected Status, got {other:?}"),
    }
}

#[tokio::test]
async fn non_json_success_is_a_decode_error() {
    let base = spawn_mock().await;
    let err = client(&base)
        .list_emails(&query("garbled@tinyhost.shop"))
        .await
        .expect_err("HTML body must not decode");
    assert!(matches!(err, UpstreamError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn unreachable_upstream_is_a_network_error() {
    // Grab a free port, then close it so nothing is listening there.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind probe");
    let addr = listener.local_addr().expect("probe address");
    drop(listener);

    let err = client(&format!("http://{addr}"))
        .list_emails(&query("anyone@tinyhost.shop"))
        .await
        .expect_err("closed port must fail");
    assert!(matches!(err, UpstreamError::Network(_)), "got {err:?}");
}
