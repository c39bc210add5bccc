//! Error handling for the LIBRIS HTTP layer
//!
//! Every error kind is surfaced to the user as the same rendered error
//! page carrying a human-readable message; only the status code and the
//! logged error code differ between kinds.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use uuid::Uuid;

use crate::render::error_page;

/// Application error types that map to rendered HTML error pages
#[derive(Error, Debug)]
pub enum PageError {
    #[error("validation error: {message}")]
    Validation { message: String },

    #[error("conflict: {message}")]
    Conflict { message: String },

    #[error("not found: {message}")]
    NotFound { message: String },

    #[error("empty catalog: {message}")]
    EmptyCatalog { message: String },

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl PageError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create an empty catalog error
    pub fn empty_catalog(message: impl Into<String>) -> Self {
        Self::EmptyCatalog {
            message: message.into(),
        }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let error_id = Uuid::new_v4();

        let (status, error_code, message) = match self {
            PageError::Validation { message } => {
                (StatusCode::UNPROCESSABLE_ENTITY, "validation_error", message)
            }
            PageError::Conflict { message } => (StatusCode::CONFLICT, "conflict", message),
            PageError::NotFound { message } => (StatusCode::NOT_FOUND, "not_found", message),
            PageError::EmptyCatalog { message } => {
                (StatusCode::NOT_FOUND, "empty_catalog", message)
            }
            PageError::Internal(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                e.to_string(),
            ),
        };

        tracing::error!(
            error_id = %error_id,
            error_code = %error_code,
            status_code = %status.as_u16(),
            "request error"
        );

        // In production, hide internal error details from the page.
        let message = if cfg!(not(debug_assertions)) && status == StatusCode::INTERNAL_SERVER_ERROR
        {
            "an internal server error occurred".to_string()
        } else {
            message
        };

        (status, error_page(&message)).into_response()
    }
}
