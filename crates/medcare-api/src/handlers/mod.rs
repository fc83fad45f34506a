//! Route handlers organized by domain.

pub mod appointment;
pub mod health;
pub mod message;
pub mod user;

use axum::http::Uri;

use medcare_core::error::AppError;

use crate::error::ApiError;

/// Fallback for unknown routes.
pub async fn not_found(uri: Uri) -> ApiError {
    AppError::not_found(format!("Route {} not found", uri.path())).into()
}
