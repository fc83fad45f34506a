//! JSON body extractor with envelope-shaped rejections.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use tracing::debug;

use medcare_core::error::AppError;

use crate::error::ApiError;

/// Body is not syntactically valid JSON.
pub const MALFORMED_JSON: &str = "Malformed JSON body";
/// Body is JSON but a field has the wrong shape.
pub const INVALID_BODY: &str = "Invalid request body";
/// Request did not declare `application/json`.
pub const JSON_CONTENT_TYPE_REQUIRED: &str = "Expected request with `Content-Type: application/json`";

/// Like [`axum::Json`], but a malformed body becomes a validation error in
/// the standard error envelope. Deserializer details are logged, never
/// returned.
#[derive(Debug, Clone, Copy, Default)]
pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                debug!(detail = %rejection.body_text(), "Rejected JSON body");
                Err(AppError::validation(rejection_message(&rejection)).into())
            }
        }
    }
}

/// Fixed client-facing text for a JSON rejection.
pub fn rejection_message(rejection: &JsonRejection) -> &'static str {
    match rejection {
        JsonRejection::JsonSyntaxError(_) => MALFORMED_JSON,
        JsonRejection::MissingJsonContentType(_) => JSON_CONTENT_TYPE_REQUIRED,
        _ => INVALID_BODY,
    }
}
