//! Health Check API Tests

use axum::http::StatusCode;
use serde_json::Value;

use crate::common::{json_body, text_body, TestApp};

/// Test basic health check endpoint returns 200 OK
#[tokio::test]
async fn test_health_check_returns_ok() {
    let app = TestApp::new();

    let response = app.get("/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json: Value = json_body(response).await;
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

/// Kubernetes-style liveness probe always returns 200
#[tokio::test]
async fn test_liveness_probe() {
    let app = TestApp::new();

    let response = app.get("/health/live").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json: Value = json_body(response).await;
    assert_eq!(json["status"], "alive");
}

/// Readiness probe reports the store check
#[tokio::test]
async fn test_readiness_probe_checks_store() {
    let app = TestApp::seeded();

    let response = app.get("/health/ready").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json: Value = json_body(response).await;
    assert_ne!(json["status"], "unhealthy");
    assert_eq!(json["checks"]["store"]["backend"], "memory");
    assert_eq!(json["checks"]["store"]["records"], 2);
    assert!(json["uptime_seconds"].is_u64());
}

#[tokio::test]
async fn test_ping_returns_version_banner() {
    let app = TestApp::new();

    let response = app.get("/ping").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        text_body(response).await,
        format!("Dogshouseservice.Version{}", env!("CARGO_PKG_VERSION"))
    );
}

#[tokio::test]
async fn test_metrics_endpoint_exposes_request_counts() {
    let app = TestApp::new();
    app.get("/dogs").await;

    let response = app.get("/metrics").await;

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()["content-type"].to_str().unwrap().to_owned();
    assert!(content_type.starts_with("text/plain"));
    let body = text_body(response).await;
    assert!(body.contains("dog_house_http_requests_total"));
}
