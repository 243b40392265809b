//! Custom error types and handling
//!
//! This module defines the application's error types and implements
//! conversion to HTTP responses for the Axum framework.
//!
//! Judging outcomes (compile error, wrong answer, ...) are not errors; they are
//! returned as [`crate::models::Verdict`] values. Only local validation failures
//! and transport failures towards the judge end up here.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::judge::ExecutionError;

/// Message shown to users when the judge could not produce a verdict
pub const RETRY_MESSAGE: &str = "Could not run your code, please try again";

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Authentication errors
    #[error("Invalid token")]
    InvalidToken,

    #[error("Token expired")]
    TokenExpired,

    #[error("Unauthorized")]
    Unauthorized,

    // Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    // Resource errors
    #[error("Not found: {0}")]
    NotFound(String),

    // Database errors
    #[error("Database error: {0}")]
    Database(String),

    // Judge transport errors
    #[error("Judge unreachable: {0}")]
    JudgeUnreachable(String),

    #[error("Judge did not respond within {0:?}")]
    JudgeTimeout(std::time::Duration),

    #[error("Judge responded with status {status}: {message}")]
    JudgeService { status: u16, message: String },

    // Internal errors
    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetails,
}

/// Error details in response
#[derive(Debug, Serialize)]
pub struct ErrorDetails {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl AppError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidToken => "INVALID_TOKEN",
            Self::TokenExpired => "TOKEN_EXPIRED",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::UnsupportedLanguage(_) => "UNSUPPORTED_LANGUAGE",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Database(_) => "DATABASE_ERROR",
            Self::JudgeUnreachable(_) => "JUDGE_UNREACHABLE",
            Self::JudgeTimeout(_) => "JUDGE_TIMEOUT",
            Self::JudgeService { .. } => "JUDGE_SERVICE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidToken | Self::TokenExpired | Self::Unauthorized => {
                StatusCode::UNAUTHORIZED
            }
            Self::Validation(_) | Self::UnsupportedLanguage(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::JudgeUnreachable(_) | Self::JudgeService { .. } => StatusCode::BAD_GATEWAY,
            Self::JudgeTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
            Self::Database(_) | Self::Internal(_) | Self::Configuration(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Whether this error came from the judge transport rather than from the caller
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::JudgeUnreachable(_) | Self::JudgeTimeout(_) | Self::JudgeService { .. }
        )
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Log internal and transport errors but don't expose details to clients
        let (message, details) = match &self {
            AppError::Internal(e) => {
                tracing::error!("Internal error: {:?}", e);
                ("An internal error occurred".to_string(), None)
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {}", e);
                ("A database error occurred".to_string(), None)
            }
            AppError::JudgeService { status, .. } => {
                tracing::warn!(error = %self, "Judge service error");
                (
                    RETRY_MESSAGE.to_string(),
                    Some(serde_json::json!({ "judge_status": status })),
                )
            }
            e if e.is_transport() => {
                tracing::warn!(error = %e, "Judge transport error");
                (RETRY_MESSAGE.to_string(), None)
            }
            _ => (self.to_string(), None),
        };

        let body = ErrorResponse {
            error: ErrorDetails {
                code: self.error_code().to_string(),
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<ExecutionError> for AppError {
    fn from(err: ExecutionError) -> Self {
        match err {
            ExecutionError::Network(msg) => AppError::JudgeUnreachable(msg),
            ExecutionError::Timeout(budget) => AppError::JudgeTimeout(budget),
            ExecutionError::Service { status, message } => {
                AppError::JudgeService { status, message }
            }
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => AppError::NotFound("Resource not found".to_string()),
            _ => AppError::Database(err.to_string()),
        }
    }
}

impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::TokenExpired,
            _ => AppError::InvalidToken,
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(err.to_string())
    }
}

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;
