//! Request errors surfaced as `ok: false` payloads.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use super::dto::ErrorResponse;

/// A request the handlers refuse to answer.
///
/// Always rendered with HTTP 200; the `ok` flag in the body is the failure
/// signal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The `date` parameter is absent or empty.
    #[error("A valid date is required")]
    DateRequired,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::debug!(error = %self, "rejected request");
        let body = ErrorResponse {
            ok: false,
            error_message: self.to_string(),
        };
        (StatusCode::OK, Json(body)).into_response()
    }
}
