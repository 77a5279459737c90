//! Dog catalog API tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use test_case::test_case;

use dog_house::application::dto::response::DogResponse;
use dog_house::config::Settings;
use dog_house::domain::Dog;
use dog_house::shared::error::ErrorResponse;

use crate::common::{json_body, seed_dogs, TestApp};

fn names(dogs: &[DogResponse]) -> Vec<&str> {
    dogs.iter().map(|d| d.name.as_str()).collect()
}

fn pack_of(count: i32) -> Vec<Dog> {
    (0..count)
        .map(|i| Dog::new(format!("dog-{:02}", i), "grey", i, i))
        .collect()
}

#[tokio::test]
async fn test_list_defaults_to_name_ascending() {
    let app = TestApp::seeded();

    let response = app.get("/dogs").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["x-total-count"], "2");
    let dogs: Vec<DogResponse> = json_body(response).await;
    assert_eq!(names(&dogs), vec!["Jessy", "Neo"]);
    assert_eq!(
        dogs[1],
        DogResponse {
            name: "Neo".into(),
            color: "red & amber".into(),
            tail_length: 22,
            weight: 32,
        }
    );
}

#[tokio::test]
async fn test_list_empty_store() {
    let app = TestApp::new();

    let response = app.get("/dogs").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["x-total-count"], "0");
    let dogs: Vec<DogResponse> = json_body(response).await;
    assert!(dogs.is_empty());
}

#[test_case("/dogs?attribute=weight&order=desc", &["Neo", "Jessy"] ; "weight descending")]
#[test_case("/dogs?attribute=tailLength&order=asc", &["Jessy", "Neo"] ; "tail length ascending")]
#[test_case("/dogs?sortBy=color&direction=desc", &["Neo", "Jessy"] ; "aliases")]
#[test_case("/dogs?order=desc", &["Neo", "Jessy"] ; "direction only sorts by name")]
#[test_case("/dogs?attribute=&order=", &["Jessy", "Neo"] ; "blank parameters use defaults")]
#[tokio::test]
async fn test_list_sorting(uri: &str, expected: &[&str]) {
    let app = TestApp::seeded();

    let response = app.get(uri).await;

    assert_eq!(response.status(), StatusCode::OK);
    let dogs: Vec<DogResponse> = json_body(response).await;
    assert_eq!(names(&dogs), expected);
}

#[test_case("/dogs?attribute=age" ; "unknown attribute")]
#[test_case("/dogs?attribute=Weight" ; "attribute is case sensitive")]
#[test_case("/dogs?order=sideways" ; "unknown direction")]
#[test_case("/dogs?pageNumber=0" ; "page number zero")]
#[test_case("/dogs?pageSize=0" ; "page size zero")]
#[test_case("/dogs?pageSize=1001" ; "page size above maximum")]
#[tokio::test]
async fn test_list_rejects_invalid_arguments(uri: &str) {
    let app = TestApp::seeded();

    let response = app.get(uri).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: ErrorResponse = json_body(response).await;
    assert_eq!(error.code, 10007);
}

#[tokio::test]
async fn test_list_rejects_non_numeric_paging() {
    let app = TestApp::seeded();

    let response = app.get("/dogs?pageNumber=first").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: ErrorResponse = json_body(response).await;
    assert_eq!(error.code, 10002);
}

#[tokio::test]
async fn test_list_pages_through_records() {
    let app = TestApp::with_settings(Settings::in_memory(), pack_of(25));

    let third = app.get("/dogs?pageNumber=3&pageSize=10").await;
    assert_eq!(third.status(), StatusCode::OK);
    assert_eq!(third.headers()["x-total-count"], "25");
    let dogs: Vec<DogResponse> = json_body(third).await;
    assert_eq!(dogs.len(), 5);
    assert_eq!(dogs[0].name, "dog-20");

    let beyond = app.get("/dogs?pageNumber=4&pageSize=10").await;
    assert_eq!(beyond.status(), StatusCode::OK);
    let dogs: Vec<DogResponse> = json_body(beyond).await;
    assert!(dogs.is_empty());
}

#[tokio::test]
async fn test_list_uses_configured_default_page_size() {
    let mut settings = Settings::in_memory();
    settings.api.default_page_size = 4;
    let app = TestApp::with_settings(settings, pack_of(10));

    let response = app.get("/dogs?attribute=weight&order=desc").await;

    assert_eq!(response.headers()["x-total-count"], "10");
    let dogs: Vec<DogResponse> = json_body(response).await;
    assert_eq!(names(&dogs), vec!["dog-09", "dog-08", "dog-07", "dog-06"]);
}

#[tokio::test]
async fn test_create_returns_created_record() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/dog",
            r#"{"name":"Doggy","color":"red","tail_length":173,"weight":33}"#,
        )
        .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let dog: DogResponse = json_body(response).await;
    assert_eq!(
        dog,
        DogResponse {
            name: "Doggy".into(),
            color: "red".into(),
            tail_length: 173,
            weight: 33,
        }
    );
    assert_eq!(app.repo.len(), 1);
}

#[tokio::test]
async fn test_created_record_is_listed() {
    let app = TestApp::seeded();

    let created = app
        .post_json("/dog", r#"{"name":"Alfa","color":"brown","tailLength":3,"weight":5}"#)
        .await;
    assert_eq!(created.status(), StatusCode::CREATED);

    let response = app.get("/dogs").await;
    assert_eq!(response.headers()["x-total-count"], "3");
    let dogs: Vec<DogResponse> = json_body(response).await;
    assert_eq!(names(&dogs), vec!["Alfa", "Jessy", "Neo"]);
}

#[tokio::test]
async fn test_create_duplicate_name_is_conflict() {
    let app = TestApp::with_settings(Settings::in_memory(), seed_dogs());

    let response = app
        .post_json("/dog", r#"{"name":"Neo","color":"blue","tail_length":1,"weight":1}"#)
        .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let error: ErrorResponse = json_body(response).await;
    assert_eq!(error.code, 10005);
    assert_eq!(app.repo.len(), 2);
}

#[test_case(r#"{"color":"red","tail_length":1,"weight":1}"# ; "missing name")]
#[test_case(r#"{"name":"  ","color":"red","tail_length":1,"weight":1}"# ; "blank name")]
#[test_case(r#"{"name":"Rex","color":"red","tail_length":-1,"weight":1}"# ; "negative tail length")]
#[test_case(r#"{"name":"Rex","color":"red","tail_length":1,"weight":-5}"# ; "negative weight")]
#[tokio::test]
async fn test_create_rejects_invalid_record(body: &str) {
    let app = TestApp::new();

    let response = app.post_json("/dog", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: ErrorResponse = json_body(response).await;
    assert_eq!(error.code, 10007);
    assert!(app.repo.is_empty());
}

#[tokio::test]
async fn test_create_reports_name_before_other_fields() {
    let app = TestApp::new();

    let response = app
        .post_json("/dog", r#"{"color":"red","tail_length":-1,"weight":-1}"#)
        .await;

    let error: ErrorResponse = json_body(response).await;
    assert_eq!(error.message, "name is required");
}

#[tokio::test]
async fn test_create_with_zero_measurements_is_accepted() {
    let app = TestApp::new();

    let response = app
        .post_json("/dog", r#"{"name":"Pup","color":"","tail_length":0,"weight":0}"#)
        .await;

    assert_eq!(response.status(), StatusCode::CREATED);
}

#[test_case("null", 10002 ; "null body")]
#[test_case("{not json", 10002 ; "malformed json")]
#[test_case("", 10002 ; "empty body")]
#[tokio::test]
async fn test_create_rejects_unusable_body(body: &str, code: u16) {
    let app = TestApp::new();

    let response = app.post_json("/dog", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: ErrorResponse = json_body(response).await;
    assert_eq!(error.code, code);
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = TestApp::new();

    let response = app.get("/cats").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let error: ErrorResponse = json_body(response).await;
    assert_eq!(error.code, 10001);
}
