//! End-to-end tests over a served router

use std::sync::Arc;

use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use serde_json::json;

use dog_house::application::dto::response::DogResponse;
use dog_house::config::Settings;
use dog_house::domain::DogRepository;
use dog_house::infrastructure::repositories::InMemoryDogRepository;
use dog_house::presentation::http::routes::create_router;
use dog_house::startup::AppState;

use crate::common::{seed_dogs, TestApp};

fn server(settings: Settings) -> TestServer {
    let repo: Arc<dyn DogRepository> = Arc::new(InMemoryDogRepository::with_dogs(seed_dogs()));
    TestServer::new(create_router(AppState::new(settings, repo))).unwrap()
}

#[tokio::test]
async fn test_create_then_list_flow() {
    let server = server(Settings::in_memory());

    server
        .post("/dog")
        .json(&json!({"name": "Doggy", "color": "red", "tail_length": 173, "weight": 33}))
        .await
        .assert_status(StatusCode::CREATED);

    let response = server
        .get("/dogs")
        .add_query_param("attribute", "tailLength")
        .add_query_param("order", "desc")
        .add_query_param("pageSize", 2)
        .await;

    response.assert_status_ok();
    assert_eq!(response.header("x-total-count"), "3");
    let dogs: Vec<DogResponse> = response.json();
    let names: Vec<_> = dogs.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["Doggy", "Neo"]);

    server
        .post("/dog")
        .json(&json!({"name": "Doggy", "color": "blue", "tail_length": 1, "weight": 1}))
        .await
        .assert_status(StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_requests_over_limit_are_rejected() {
    let mut settings = Settings::in_memory();
    settings.rate_limit.requests_per_second = 2;
    let app = TestApp::with_settings(settings, seed_dogs());

    let request = || {
        axum::http::Request::builder()
            .uri("/ping")
            .header("x-forwarded-for", "198.51.100.4")
            .body(axum::body::Body::empty())
            .unwrap()
    };

    let first = app.send(request()).await;
    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(first.headers()["x-ratelimit-limit"], "2");
    assert_eq!(app.send(request()).await.status(), StatusCode::OK);

    let limited = app.send(request()).await;
    assert_eq!(limited.status(), StatusCode::TOO_MANY_REQUESTS);
    assert!(limited.headers().contains_key("retry-after"));

    // Health probes are not limited
    assert_eq!(app.get("/health/live").await.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_cors_exposes_total_count() {
    let server = server(Settings::in_memory());

    let response = server
        .get("/dogs")
        .add_header(
            HeaderName::from_static("origin"),
            HeaderValue::from_static("http://localhost:8080"),
        )
        .await;

    response.assert_status_ok();
    let exposed = response.header("access-control-expose-headers");
    assert!(exposed.to_str().unwrap().contains("x-total-count"));
}
