use std::time::Duration;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use stocklens_server::{api::app_router, build_state, config::Config};
use tower::ServiceExt;

fn build_test_router() -> Router {
    let config = Config {
        listen_addr: "127.0.0.1:0".parse().unwrap(),
        cors_allow: vec!["*".to_string()],
        request_timeout: Duration::from_secs(5),
    };
    app_router(build_state(), &config)
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn lists_every_industry() {
    let (status, body) = get_json(build_test_router(), "/api/industries").await;
    assert_eq!(status, StatusCode::OK);

    let entries = body.as_array().unwrap();
    assert_eq!(entries.len(), 160);
    assert_eq!(entries[0]["id"], "STEEL");
    assert_eq!(entries[0]["name"], "Steel");
    assert_eq!(entries[159]["id"], "UNKNOWN");
}

#[tokio::test]
async fn resolves_industry_names_case_insensitively() {
    let (status, body) = get_json(
        build_test_router(),
        "/api/industries/resolve?name=banks%20-%20regional",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["industry"], "BANKS_REGIONAL");
    assert_eq!(body["financial"], true);
    assert_eq!(body["bank"], true);
    assert_eq!(body["lowVolatility"], false);
}

#[tokio::test]
async fn missing_name_resolves_to_unknown() {
    let (status, body) = get_json(build_test_router(), "/api/industries/resolve").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["industry"], "UNKNOWN");
    assert_eq!(body["capitalIntensive"], false);
}

#[tokio::test]
async fn lists_categories_for_identifier() {
    let (status, body) = get_json(
        build_test_router(),
        "/api/industries/SOFTWARE_INFRASTRUCTURE/categories",
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let ids: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_str().unwrap())
        .collect();
    assert!(ids.contains(&"SOFTWARE"));
    assert!(ids.contains(&"TECHNOLOGY"));
    assert!(ids.contains(&"ASSET_LIGHT"));
}

#[tokio::test]
async fn unknown_identifier_is_not_found() {
    let (status, body) = get_json(
        build_test_router(),
        "/api/industries/NOT_AN_INDUSTRY/categories",
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 404);
}

#[tokio::test]
async fn sec_filings_insights_are_neutral() {
    let (status, body) = get_json(
        build_test_router(),
        "/api/sec-filings/insights?symbol=AAPL&exchange=NASDAQ&date=2024-03-15",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["summary"], "");
    assert_eq!(body["filingType"], "");
    assert_eq!(body["sentimentScore"], 0.0);
}

#[tokio::test]
async fn social_media_insights_default_to_today() {
    let (status, body) = get_json(
        build_test_router(),
        "/api/social-media/insights?symbol=SHOP&exchange=TSX",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["sentimentScore"], 0.0);
}

#[tokio::test]
async fn missing_symbol_is_bad_request() {
    let (status, body) = get_json(
        build_test_router(),
        "/api/sec-filings/insights?exchange=NYSE",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);
    assert!(body["message"].as_str().unwrap().contains("symbol"));
}
