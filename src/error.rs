//! Error handling

use axum::{
    response::{IntoResponse, Response},
    http::StatusCode,
    Json,
};
use serde_json::json;

pub type AppResult<T> = Result<T, AppError>;

/// Errors surfaced to dashboard API callers
#[derive(Debug)]
pub enum AppError {
    // Resource errors
    NotFound(String),

    // Validation errors
    ValidationError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.as_str()),
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg.as_str()),
        };

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}

/// Errors from a single Attestation Collector fetch.
/// None of these are fatal; the poller logs them and keeps the stale cache.
#[derive(Debug, thiserror::Error)]
pub enum CollectorError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("failed to reach collector: {0}")]
    Network(#[source] reqwest::Error),

    #[error("collector returned status {0}")]
    UnexpectedStatus(u16),

    #[error("failed to decode collector response: {0}")]
    Decode(#[source] reqwest::Error),
}
