//! Shared error envelope and DomainError → HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode};

/// Standard error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }

    pub fn internal() -> Self {
        Self::new("INTERNAL_ERROR", "An unexpected error occurred")
    }
}

/// Maps a domain error to a response without exposing storage details.
pub fn handle_domain_error(error: DomainError) -> Response {
    match error.code() {
        ErrorCode::ProfileNotFound | ErrorCode::UserNotFound => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new("NOT_FOUND", error.message())),
        )
            .into_response(),
        ErrorCode::ValidationFailed => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(error.message())),
        )
            .into_response(),
        ErrorCode::ProfileExists | ErrorCode::DatabaseError | ErrorCode::InternalError => {
            tracing::error!(error = %error, "Request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal()),
            )
                .into_response()
        }
    }
}
