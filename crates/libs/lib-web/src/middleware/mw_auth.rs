//! # Authentication Middleware
//!
//! Validates the `Authorization: Bearer <token>` header and injects the
//! decoded [`Claims`] into request extensions for downstream handlers.
//!
//! Applied with `axum::middleware::from_fn_with_state`, taking the [`Config`]
//! explicitly rather than reaching for a global.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use lib_auth::{decode_token, Claims};
use lib_core::{AppError, Config};
use tracing::{debug, warn};

/// Bearer-token authentication middleware.
///
/// Missing header, non-bearer scheme, bad signature, and expired token all
/// collapse to `401 Unauthorized`.
pub async fn require_auth(
    State(config): State<Config>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            warn!("[AUTH] Missing Authorization header");
            AppError::Unauthorized("Not authenticated".to_string())
        })?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        warn!("[AUTH] Authorization header is not a bearer token");
        AppError::Unauthorized("Not authenticated".to_string())
    })?;

    let claims: Claims = decode_token(token, &config.jwt_secret).map_err(|e| {
        warn!("[AUTH] Token validation failed: {}", e);
        AppError::Unauthorized("Invalid or expired token".to_string())
    })?;

    debug!("[AUTH] Authenticated user: {}", claims.sub);

    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}
