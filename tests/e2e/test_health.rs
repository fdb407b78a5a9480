use crate::e2e::helpers;

use chrono::DateTime;
use helpers::TestContext;
use hyper::StatusCode;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_ok_for_health_check(ctx: &TestContext) {
    let response = ctx.client.get("/api/health").await.unwrap();

    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().unwrap();
    assert_eq!(body.get("status").and_then(|v| v.as_str()), Some("ok"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_parseable_iso_timestamp(ctx: &TestContext) {
    let response = ctx.client.get("/api/health").await.unwrap();
    response.assert_status(StatusCode::OK);

    let timestamp = response
        .body
        .as_ref()
        .and_then(|b| b.get("timestamp"))
        .and_then(|v| v.as_str())
        .expect("Missing timestamp");

    assert!(timestamp.ends_with('Z'), "Expected UTC timestamp: {}", timestamp);
    assert!(
        DateTime::parse_from_rfc3339(timestamp).is_ok(),
        "Timestamp is not ISO-8601: {}",
        timestamp
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_include_request_id_in_health_responses(ctx: &TestContext) {
    let response = ctx.client.get("/api/health").await.unwrap();
    response.assert_header_exists("x-request-id");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_propagate_caller_request_id(ctx: &TestContext) {
    let response = ctx
        .client
        .get_with_headers("/api/health", &[("x-request-id", "edge-req-42")])
        .await
        .unwrap();

    assert_eq!(
        response.header("x-request-id").map(String::as_str),
        Some("edge-req-42")
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_handle_concurrent_health_checks(ctx: &TestContext) {
    let mut futures = Vec::new();
    for _ in 0..10 {
        let client = ctx.client.clone();
        futures.push(async move { client.get("/api/health").await });
    }

    let results = futures::future::join_all(futures).await;

    for result in results {
        let response = result.unwrap();
        response.assert_status(StatusCode::OK);
    }
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_allow_cross_origin_requests_by_default(ctx: &TestContext) {
    let response = ctx
        .client
        .get_with_headers("/api/health", &[("origin", "https://app.example")])
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(
        response
            .header("access-control-allow-origin")
            .map(String::as_str),
        Some("*")
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_404_for_unknown_routes(ctx: &TestContext) {
    let response = ctx.client.get("/api/does-not-exist").await.unwrap();
    response.assert_status(StatusCode::NOT_FOUND);
}
