//! API error handling.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use topstory_core::error::TopStoryError;

/// API error type.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
    code: String,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(status: StatusCode, message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            code: code.into(),
        }
    }

    /// Upstream API failure.
    pub fn upstream(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_GATEWAY, message, "UPSTREAM_ERROR")
    }

    /// Internal server error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message, "INTERNAL_ERROR")
    }

    /// Returns the HTTP status of this error.
    pub fn status(&self) -> StatusCode {
        self.status
    }
}

/// Error response body.
#[derive(Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Serialize)]
struct ErrorBody {
    code: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.code,
                message: self.message,
            },
        };

        (self.status, Json(body)).into_response()
    }
}

impl From<TopStoryError> for ApiError {
    fn from(err: TopStoryError) -> Self {
        if err.is_upstream_failure() {
            tracing::warn!(error = %err, "Could not retrieve top story");
            ApiError::upstream("Could not retrieve top story")
        } else {
            tracing::error!(error = %err, "Internal error");
            ApiError::internal("An internal error occurred")
        }
    }
}
