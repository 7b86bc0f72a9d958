//! # HTTP Request Handlers
//!
//! Axum handlers for the credential gateway, organized by feature domain.
//!
//! - **[`auth`]**: registration and login
//!   - `POST /api/auth/register` - create a new user account
//!   - `POST /api/auth/login` - verify credentials, issue a bearer token
//!
//! - **[`users`]**: per-user operations (bearer-protected)
//!   - `GET /api/users/{id}/superuser` - superuser flag lookup
//!   - `DELETE /api/users/{id}` - remove a user record
//!
//! Handlers return `Result<T, AppError>`; every failure surfaces as a typed
//! status with a JSON error body, mapped in `lib-core::error`.

pub mod auth;
pub mod users;
