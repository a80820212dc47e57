//! Backend Error Types
//!
//! This module defines error types specific to the backend server.
//! These errors are used in HTTP handlers and can be converted to HTTP
//! responses carrying a JSON body.
//!
//! # Error Categories
//!
//! - `Handler` - Request-level failures with an explicit status code
//!   (missing fields, unknown ids, duplicate slugs, ...)
//! - `Database` - sqlx failures; `RowNotFound` maps to 404, everything
//!   else to 500
//! - `Provider` - Failures talking to the OAuth identity provider
//! - `Shared` - Validation/serialization errors from the shared module
//! - `Serialization` - JSON serialization failures

use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::SharedError;

/// Backend-specific error types
///
/// Each variant carries enough context to produce an HTTP response. The
/// named constructors cover the common handler cases.
///
/// # Usage
///
/// ```rust
/// use dapphunt::backend::error::ApiError;
/// use axum::http::StatusCode;
///
/// let err = ApiError::bad_request("Missing required fields");
/// assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
/// ```
#[derive(Debug, Error)]
pub enum ApiError {
    /// Handler error with an explicit status code
    #[error("Handler error: {message}")]
    Handler {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Identity provider error (token exchange, userinfo fetch)
    #[error("Identity provider error: {message}")]
    Provider {
        /// Human-readable error message
        message: String,
    },

    /// Shared error (from shared module)
    #[error(transparent)]
    Shared(#[from] SharedError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ApiError {
    /// Create a handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::Handler {
            status,
            message: message.into(),
        }
    }

    /// 400 with a message
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::BAD_REQUEST, message)
    }

    /// 404 with a message
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::NOT_FOUND, message)
    }

    /// 409 with a message
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::CONFLICT, message)
    }

    /// 401 with a message
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::UNAUTHORIZED, message)
    }

    /// 403 with a message
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::FORBIDDEN, message)
    }

    /// Create an identity provider error
    pub fn provider(message: impl Into<String>) -> Self {
        Self::Provider {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `Handler` - Uses the status code from the error
    /// - `Database` - 404 for `RowNotFound`, otherwise 500
    /// - `Provider` - 502 Bad Gateway
    /// - `Shared` - 400 for validation, 500 for serialization
    /// - `Serialization` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Handler { status, .. } => *status,
            Self::Database(sqlx::Error::RowNotFound) => StatusCode::NOT_FOUND,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Provider { .. } => StatusCode::BAD_GATEWAY,
            Self::Shared(err) => match err {
                SharedError::SerializationError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
                SharedError::ValidationError { .. } => StatusCode::BAD_REQUEST,
            },
            Self::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error message for the response body
    ///
    /// Database and serialization details stay in the logs; the client
    /// only sees a generic message for those.
    pub fn message(&self) -> String {
        match self {
            Self::Handler { message, .. } => message.clone(),
            Self::Database(sqlx::Error::RowNotFound) => "Not found".to_string(),
            Self::Database(_) => "Internal server error".to_string(),
            Self::Provider { message } => message.clone(),
            Self::Shared(err) => err.to_string(),
            Self::Serialization(_) => "Internal server error".to_string(),
        }
    }
}
