//! Error types for the HTTP adapter.
//!
//! Every failure crossing the wire becomes a non-2xx status with an
//! `{"error": <message>}` JSON body. Truncation is not an error and never
//! lands here.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Result type for adapter operations.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors that can occur while serving a request.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The submitted number is zero or negative.
    #[error("number must be a positive integer, got {0}")]
    NonPositiveNumber(i64),

    /// The engine rejected the computation.
    #[error(transparent)]
    Engine(#[from] hailstone_core::Error),
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NonPositiveNumber(_) => StatusCode::BAD_REQUEST,
            ApiError::Engine(hailstone_core::Error::InvalidStart(_)) => StatusCode::BAD_REQUEST,
            ApiError::Engine(hailstone_core::Error::Overflow { .. }) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
