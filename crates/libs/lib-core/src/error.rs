//! # Centralized Error Handling
//!
//! The application-wide error type [`AppError`], following the `thiserror`
//! pattern. Every user-visible failure of the gateway maps to exactly one
//! variant, and every variant maps to exactly one HTTP status:
//!
//! | Variant        | Status | Meaning                              |
//! |----------------|--------|--------------------------------------|
//! | `InvalidInput` | 400    | malformed password or email          |
//! | `Unauthorized` | 401    | bad credentials or bad bearer token  |
//! | `NotFound`     | 404    | unknown user id                      |
//! | `Conflict`     | 409    | duplicate email or username          |
//! | `Config`       | 500    | startup misconfiguration             |
//! | `Internal`     | 500    | hashing, signing, or database faults |
//!
//! All errors are terminal for the current call; nothing is retried or
//! recovered internally. Server-side details of 5xx errors are logged but
//! never sent to the client.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Application-wide error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Registration input failed validation (weak password, malformed email).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Credential verification or token validation failed.
    ///
    /// Unknown username and wrong password collapse into this one variant so
    /// the response cannot be used to enumerate usernames.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// No user record with the requested id.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Username or email already registered.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Configuration error during startup.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Unexpected internal failure.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Config(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the message sent to the client.
    ///
    /// Internal errors return a generic message so implementation details
    /// never leave the server.
    pub fn user_message(&self) -> String {
        match self {
            AppError::InvalidInput(msg)
            | AppError::Unauthorized(msg)
            | AppError::NotFound(msg)
            | AppError::Conflict(msg) => msg.clone(),
            AppError::Config(_) | AppError::Internal(_) => {
                "An internal error occurred".to_string()
            }
        }
    }

    fn code(&self) -> &'static str {
        match self {
            AppError::InvalidInput(_) => "InvalidInput",
            AppError::Unauthorized(_) => "Unauthorized",
            AppError::NotFound(_) => "NotFound",
            AppError::Conflict(_) => "Conflict",
            AppError::Config(_) => "Config",
            AppError::Internal(_) => "Internal",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("Server error: {}", self);
        } else {
            tracing::debug!("Client error: {}", self);
        }

        let body = Json(json!({
            "error": self.user_message(),
            "code": self.code(),
        }));

        let mut response = (status, body).into_response();

        // Challenge header for bearer auth failures
        if status == StatusCode::UNAUTHORIZED {
            response.headers_mut().insert(
                header::WWW_AUTHENTICATE,
                header::HeaderValue::from_static("Bearer"),
            );
        }

        response
    }
}

/// Convert `sqlx::Error` to `AppError`.
///
/// UNIQUE constraint violations surface as `Conflict` so the storage layer
/// backstops the gateway's pre-checks against duplicate-creation races.
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => AppError::NotFound("Database record not found".to_string()),
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                AppError::Conflict("Username or email already registered".to_string())
            }
            sqlx::Error::Database(db_err) => {
                AppError::Internal(format!("Database error: {}", db_err.message()))
            }
            _ => AppError::Internal(format!("Database error: {}", err)),
        }
    }
}

/// Convert `anyhow::Error` to `AppError`.
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}
