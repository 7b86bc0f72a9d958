//! # Authentication DTOs
//!
//! Wire types for registration and login. All fields use snake_case JSON
//! (default serde behavior). Plaintext passwords exist only in the request
//! structs and are never logged or persisted.

use serde::{Deserialize, Serialize};

/// Registration request for a new user account.
///
/// Username and email must be unique; the password must satisfy the strength
/// rules in `lib-utils::validation`. On success the endpoint returns
/// [`crate::dto::UserPublic`] with `201 Created`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Login request with username and plaintext password.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login response.
///
/// The token is an opaque signed string; clients present it as
/// `Authorization: Bearer <access_token>`.
///
/// ```json
/// {
///   "access_token": "eyJhbGciOiJIUzI1NiIs...",
///   "token_type": "bearer"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

impl TokenResponse {
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
        }
    }
}

/// Standard error response body.
///
/// Emitted by `AppError::into_response`; the `code` field mirrors the error
/// variant name and is ignored here so clients that only care about the
/// message can use this struct directly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}
