//! Error handling module
//!
//! Defines error types and handling logic used in the project

use crate::models::ErrorBody;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Summary reported when the model listing fails
pub const MODELS_FAILED: &str = "Failed to fetch models";

/// Summary reported when a chat completion fails
pub const CHAT_FAILED: &str = "Groq request failed";

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Request validation failed
    #[error("{0}")]
    Validation(String),

    /// Upstream provider call failed
    #[error("{error}: {details}")]
    Upstream {
        /// Short summary shown as `error`
        error: String,
        /// Underlying failure message shown as `details`
        details: String,
    },
}

impl AppError {
    /// Get HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Upstream { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Convert to the JSON error body
    pub fn to_error_body(&self) -> ErrorBody {
        match self {
            AppError::Validation(message) => ErrorBody {
                error: Some(message.clone()),
                details: None,
            },
            AppError::Upstream { error, details } => ErrorBody {
                error: Some(error.clone()),
                details: Some(details.clone()),
            },
        }
    }
}

/// Implement IntoResponse trait to allow errors to be returned directly as HTTP responses
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            AppError::Upstream { .. } => {
                tracing::error!("Upstream error: {} - Status code: {}", self, status);
            }
            AppError::Validation(_) => {
                tracing::warn!("Client error: {} - Status code: {}", self, status);
            }
        }

        (status, Json(self.to_error_body())).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Error handling helper functions
pub mod helpers {
    use super::*;

    /// Create validation error
    pub fn validation_error(message: impl Into<String>) -> AppError {
        AppError::Validation(message.into())
    }

    /// Create upstream error
    pub fn upstream_error(error: impl Into<String>, details: impl Into<String>) -> AppError {
        AppError::Upstream {
            error: error.into(),
            details: details.into(),
        }
    }
}

/// Error context extension trait
pub trait ErrorContext<T> {
    /// Wrap a failure as an upstream error with the given summary
    fn upstream_context(self, summary: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: Into<anyhow::Error>,
{
    fn upstream_context(self, summary: &str) -> AppResult<T> {
        self.map_err(|e| {
            let e: anyhow::Error = e.into();
            helpers::upstream_error(summary, format!("{:#}", e))
        })
    }
}
