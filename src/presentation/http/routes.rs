//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{
    middleware,
    response::IntoResponse,
    routing::{get, post},
    Router,
};

use super::handlers;
use crate::infrastructure::metrics;
use crate::presentation::middleware::{
    create_cors_layer, create_trace_layer, rate_limit, track_metrics,
};
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    let cors = create_cors_layer(&state.settings.cors);

    Router::new()
        .merge(api_routes(state.clone()))
        // Health check endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/health/live", get(handlers::health::liveness))
        .route("/health/ready", get(handlers::health::readiness))
        // Prometheus metrics endpoint
        .route("/metrics", get(metrics_handler))
        // Outermost per-route layer, so rate limited requests are counted too
        .route_layer(middleware::from_fn(track_metrics))
        .fallback(handlers::not_found)
        .layer(create_trace_layer())
        .layer(cors)
        .with_state(state)
}

/// Prometheus metrics endpoint handler
async fn metrics_handler() -> impl IntoResponse {
    let metrics = metrics::gather_metrics();
    (
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; version=0.0.4; charset=utf-8",
        )],
        metrics,
    )
}

/// Catalog routes, rate limited per client
fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/ping", get(handlers::ping::ping))
        .route("/dogs", get(handlers::dog::list_dogs))
        .route("/dog", post(handlers::dog::create_dog))
        .route_layer(middleware::from_fn_with_state(state, rate_limit))
}
