//! Common Test Utilities
//!
//! Shared helpers, fixtures, and test infrastructure.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::Request,
    response::Response,
    Router,
};
use serde::de::DeserializeOwned;
use tower::ServiceExt;

use dog_house::application::services::DogService;
use dog_house::config::Settings;
use dog_house::domain::{Dog, DogRepository};
use dog_house::infrastructure::repositories::InMemoryDogRepository;
use dog_house::presentation::http::routes::create_router;
use dog_house::startup::AppState;

/// Test application builder
pub struct TestApp {
    pub router: Router,
    pub repo: Arc<InMemoryDogRepository>,
}

impl TestApp {
    /// Create a test application over an empty in-memory store
    pub fn new() -> Self {
        Self::with_settings(Settings::in_memory(), Vec::new())
    }

    /// Create a test application with the two well-known records
    pub fn seeded() -> Self {
        Self::with_settings(Settings::in_memory(), seed_dogs())
    }

    pub fn with_settings(settings: Settings, dogs: impl IntoIterator<Item = Dog>) -> Self {
        let repo = Arc::new(InMemoryDogRepository::with_dogs(dogs));
        let dog_repo: Arc<dyn DogRepository> = repo.clone();
        let router = create_router(AppState::new(settings, dog_repo));
        Self { router, repo }
    }

    /// Create a test application routing to an arbitrary service
    pub fn with_service(service: Arc<dyn DogService>) -> Self {
        let repo = Arc::new(InMemoryDogRepository::new());
        let dog_repo: Arc<dyn DogRepository> = repo.clone();
        let state = AppState::with_service(Settings::in_memory(), dog_repo, service);
        Self {
            router: create_router(state),
            repo,
        }
    }

    /// Make a GET request to the application
    pub async fn get(&self, uri: &str) -> Response {
        self.send(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    /// Make a POST request with JSON body
    pub async fn post_json(&self, uri: &str, body: &str) -> Response {
        self.send(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    pub async fn send(&self, request: Request<Body>) -> Response {
        self.router.clone().oneshot(request).await.unwrap()
    }
}

/// Read a response body as JSON
pub async fn json_body<T: DeserializeOwned>(response: Response) -> T {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Read a response body as text
pub async fn text_body(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// The two records shipped with the database seed
pub fn seed_dogs() -> Vec<Dog> {
    vec![
        Dog::new("Neo", "red & amber", 22, 32),
        Dog::new("Jessy", "black & white", 7, 14),
    ]
}
