//! Application error type and HTTP response mapping.
//!
//! Every failure a handler can surface is an [`AppError`] variant. The
//! [`IntoResponse`] impl renders a flat JSON body (`{"error": "..."}`), so
//! callers always receive a single human-readable message per failure.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Errors surfaced by the request pipeline.
///
/// Each variant maps to exactly one HTTP status code. Messages are the full
/// client-facing text; internal failure detail (for example why a token did
/// not verify) is logged server-side and never carried here.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Missing or invalid credentials (403).
    #[error("{0}")]
    Forbidden(String),
    /// Request did not declare `application/json` (415).
    #[error("{0}")]
    UnsupportedMediaType(String),
    /// Malformed or incomplete payload (400).
    #[error("{0}")]
    Validation(String),
    /// Shorthand already claimed (409).
    #[error("{0}")]
    Conflict(String),
    /// Unknown shorthand (404).
    #[error("{0}")]
    NotFound(String),
    /// Unexpected server-side failure (500).
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden(message.into())
    }
    pub fn unsupported_media_type(message: impl Into<String>) -> Self {
        Self::UnsupportedMediaType(message.into())
    }
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Forbidden(message) => (StatusCode::FORBIDDEN, message),
            AppError::UnsupportedMediaType(message) => {
                (StatusCode::UNSUPPORTED_MEDIA_TYPE, message)
            }
            AppError::Validation(message) => (StatusCode::BAD_REQUEST, message),
            AppError::Conflict(message) => (StatusCode::CONFLICT, message),
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            AppError::Internal(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
