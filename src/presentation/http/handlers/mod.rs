//! HTTP Handlers
//!
//! Request handlers for all HTTP endpoints.

pub mod dog;
pub mod health;
pub mod ping;

use crate::shared::error::AppError;

/// Fallback for unknown routes
pub async fn not_found() -> AppError {
    AppError::NotFound("Resource not found".into())
}
