//! Dog Handlers

use axum::{
    extract::{rejection::JsonRejection, rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::application::dto::request::{CreateDogRequest, ListDogsQueryParams};
use crate::application::dto::response::DogResponse;
use crate::application::services::{CreateDogDto, DogError};
use crate::infrastructure::metrics;
use crate::shared::error::AppError;
use crate::shared::validation::validate;
use crate::startup::AppState;

/// Header carrying the unpaged record count
pub const TOTAL_COUNT_HEADER: &str = "x-total-count";

/// List dogs, sorted and paged
pub async fn list_dogs(
    State(state): State<AppState>,
    query: Result<Query<ListDogsQueryParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(params) = query.map_err(|e| AppError::BadRequest(e.body_text()))?;
    validate(&params)?;

    let api = &state.settings.api;
    let page_number = params.page_number.unwrap_or(1);
    let page_size = params.page_size.unwrap_or(api.default_page_size);
    if page_size > api.max_page_size {
        return Err(AppError::Validation(format!(
            "pageSize: must not exceed {}",
            api.max_page_size
        )));
    }

    let page = state
        .dog_service
        .list_dogs(params.attribute, params.order, page_number, page_size)
        .await
        .map_err(|e| service_error("list", e))?;

    let body: Vec<DogResponse> = page.dogs.into_iter().map(DogResponse::from).collect();

    Ok((
        [(TOTAL_COUNT_HEADER, page.total_count.to_string())],
        Json(body),
    ))
}

/// Create a new dog
///
/// A JSON `null` body reaches the service as absent input.
pub async fn create_dog(
    State(state): State<AppState>,
    body: Result<Json<Option<CreateDogRequest>>, JsonRejection>,
) -> Result<(StatusCode, Json<DogResponse>), AppError> {
    let Json(body) = body.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let dog = state
        .dog_service
        .create_dog(body.map(CreateDogDto::from))
        .await
        .map_err(|e| service_error("create", e))?;

    Ok((StatusCode::CREATED, Json(DogResponse::from(dog))))
}

fn service_error(operation: &'static str, e: DogError) -> AppError {
    metrics::record_service_error(operation, e.kind());
    tracing::debug!(operation, kind = e.kind(), error = %e, "Dog request rejected");
    AppError::from(e)
}
