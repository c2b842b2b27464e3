use axum::{
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use common::{
    filter_set::{Category, FilterSet, Status},
    search_result::SearchResponse,
};
use tower::ServiceExt;

use super::*;

async fn send(request: Request<Body>) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
    let app = router(&ServerConfig::default());
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, headers, body.to_vec())
}

fn search_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/search")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn health_reports_ok() {
    let (status, _, body) = send(Request::get("/health").body(Body::empty()).unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(value, serde_json::json!({ "message": "OK" }));
}

#[tokio::test]
async fn root_returns_greeting() {
    let (status, _, body) = send(Request::get("/").body(Body::empty()).unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    assert!(!body.is_empty());
}

#[tokio::test]
async fn search_returns_generated_items_and_echoes_filters() {
    let body = r#"{"keyword":"laptop","category":"electronics","dateRange":"all","status":"active","sortBy":"latest"}"#;
    let (status, _, body) = send(search_request(body)).await;
    assert_eq!(status, StatusCode::OK);

    let response: SearchResponse = serde_json::from_slice(&body).unwrap();
    assert!(response.success);
    assert_eq!(response.message, "검색이 완료되었습니다.");
    let data = response.data.unwrap();
    assert_eq!(data.total as usize, data.items.len());
    assert!((10..=59).contains(&data.items.len()));
    assert_eq!(data.filters.keyword, "laptop");
    assert_eq!(data.filters.category, Category::Electronics);
    assert_eq!(data.filters.status, Status::Active);
    assert!(data.items.iter().all(|i| i.category == "electronics" && i.status == "active"));
    assert!(data.items.windows(2).all(|w| w[0].created_at >= w[1].created_at));
}

#[tokio::test]
async fn search_response_uses_camel_case_fields() {
    let (_, _, body) = send(search_request("{}")).await;
    let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert!(value["data"]["items"][0]["createdAt"].is_string());
    assert_eq!(value["data"]["filters"], serde_json::to_value(FilterSet::default()).unwrap());
}

#[tokio::test]
async fn unparsable_body_yields_500_envelope() {
    let (status, _, body) = send(search_request("not json")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(value, serde_json::json!({ "success": false, "message": "검색 처리 중 오류가 발생했습니다." }));
}

#[tokio::test]
async fn preflight_from_allowed_origin_is_accepted() {
    let request = Request::builder()
        .method("OPTIONS")
        .uri("/search")
        .header("origin", "http://localhost:5173")
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "content-type")
        .body(Body::empty())
        .unwrap();
    let (status, headers, _) = send(request).await;
    assert!(status.is_success());
    assert_eq!(headers["access-control-allow-origin"], "http://localhost:5173");
    assert_eq!(headers["access-control-allow-credentials"], "true");
    assert_eq!(headers["access-control-max-age"], "86400");
}

#[tokio::test]
async fn unknown_origin_gets_no_cors_headers() {
    let request = Request::builder()
        .method("POST")
        .uri("/search")
        .header("origin", "http://evil.test")
        .header("content-type", "application/json")
        .body(Body::from("{}"))
        .unwrap();
    let (status, headers, _) = send(request).await;
    assert_eq!(status, StatusCode::OK);
    assert!(headers.get("access-control-allow-origin").is_none());
}

#[tokio::test]
async fn wildcard_origin_config_still_serves() {
    let config = ServerConfig { cors_origins: vec!["*".to_string(), "http://localhost:5173".to_string()], ..ServerConfig::default() };
    let request = Request::builder()
        .uri("/health")
        .header("origin", "http://localhost:5173")
        .body(Body::empty())
        .unwrap();
    let response = router(&config).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["access-control-allow-origin"], "http://localhost:5173");
}
