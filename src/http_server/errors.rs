//! # HTTP API Errors
//!
//! Every error is answered with a plain-text body.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tokio::task::JoinError;

use crate::observability::Logger;
use crate::schema::ValidationError;
use crate::storage::StorageError;

/// Body sent for any rejected animal
pub const NOT_PROPERLY_FORMATTED: &str = "The animal is not properly formatted.";

/// Result type for handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// API errors
#[derive(Debug, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Body parsed but failed validation
    #[error("invalid animal: {0}")]
    InvalidAnimal(#[from] ValidationError),

    /// Body is not JSON
    #[error("malformed body: {0}")]
    MalformedBody(String),

    /// No animal with the requested id
    #[error("animal not found")]
    NotFound,

    // ==================
    // Server Errors (5xx)
    // ==================
    /// The backing document could not be written
    #[error("{0}")]
    Storage(#[from] StorageError),

    /// A blocking store task panicked or was cancelled
    #[error("store task failed: {0}")]
    Internal(String),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::MalformedBody(rejection.body_text())
    }
}

impl From<JoinError> for ApiError {
    fn from(err: JoinError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidAnimal(_) | ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Storage(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            ApiError::InvalidAnimal(_) | ApiError::MalformedBody(_) => {
                Logger::warn("ANIMAL_REJECTED", &[("reason", self.to_string().as_str())]);
                (status, NOT_PROPERLY_FORMATTED).into_response()
            }
            ApiError::NotFound => status.into_response(),
            ApiError::Storage(err) => {
                err.log("STORE_PERSIST_FAILED");
                (status, "Internal Server Error").into_response()
            }
            ApiError::Internal(reason) => {
                Logger::error("STORE_TASK_FAILED", &[("reason", reason.as_str())]);
                (status, "Internal Server Error").into_response()
            }
        }
    }
}
