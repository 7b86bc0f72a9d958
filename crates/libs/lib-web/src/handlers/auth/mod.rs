//! # Authentication Handlers
//!
//! Registration and login: the credential half of the gateway.
//!
//! Registration checks uniqueness (email before username), validates input,
//! hashes with Argon2, and persists. Login verifies the stored hash and
//! issues a time-bounded bearer token. An unknown username and a wrong
//! password produce byte-identical responses so the endpoint cannot be used
//! to enumerate accounts.

use axum::{
    extract::{Json, State},
    http::StatusCode,
};
use lib_auth::{hash_password, issue_token, verify_password};
use lib_core::{
    dto::{LoginRequest, RegisterRequest, TokenResponse, UserPublic},
    model::store::UserRepository,
    AppError, Config, DbPool,
};
use lib_utils::{validate_email, validate_password};
use tracing::{debug, info, instrument, warn};

/// Registration handler - creates a new user account.
///
/// # Errors
///
/// * `409 Conflict` - email or username already registered (email checked
///   first; a storage-level UNIQUE violation from a concurrent insert maps
///   here too)
/// * `400 InvalidInput` - weak password or malformed email; rejected before
///   any store mutation
#[instrument(skip(pool, req), fields(username = %req.username, email = %req.email))]
pub async fn register(
    State(pool): State<DbPool>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<UserPublic>), AppError> {
    info!("[REGISTER] New registration request");

    if UserRepository::exists_by_email(&pool, &req.email).await? {
        warn!("[REGISTER] Email already registered");
        return Err(AppError::Conflict(format!(
            "Email {} already registered",
            req.email
        )));
    }

    if UserRepository::exists_by_username(&pool, &req.username).await? {
        warn!("[REGISTER] Username already registered");
        return Err(AppError::Conflict(format!(
            "Username {} already registered",
            req.username
        )));
    }

    validate_password(&req.password).map_err(AppError::InvalidInput)?;
    validate_email(&req.email).map_err(AppError::InvalidInput)?;

    debug!("[REGISTER] Hashing password");
    let password_hash =
        hash_password(&req.password).map_err(|e| AppError::Internal(e.to_string()))?;

    // The UNIQUE constraints backstop the pre-checks above; a lost race
    // surfaces as Conflict through the sqlx error conversion.
    let user = UserRepository::create(&pool, &req.username, &req.email, &password_hash).await?;

    info!("[REGISTER] User created (id: {})", user.id);

    Ok((StatusCode::CREATED, Json(UserPublic::from(&user))))
}

/// Login handler - verifies credentials and issues a bearer token.
///
/// # Errors
///
/// * `401 Unauthorized` - unknown username or wrong password, in one
///   indistinguishable shape
#[instrument(skip(pool, config, req), fields(username = %req.username))]
pub async fn login(
    State(pool): State<DbPool>,
    State(config): State<Config>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    info!("[LOGIN] Login attempt");

    let user = UserRepository::find_by_username(&pool, &req.username).await?;

    let verified = match &user {
        Some(user) => verify_password(&req.password, &user.password_hash)
            .map_err(|e| AppError::Internal(e.to_string()))?,
        None => false,
    };

    if !verified {
        warn!("[LOGIN] Credential verification failed");
        return Err(AppError::Unauthorized(
            "Incorrect username or password".to_string(),
        ));
    }

    debug!("[LOGIN] Issuing bearer token (ttl: {}m)", config.token_ttl_minutes);
    let token = issue_token(&req.username, &config.jwt_secret, config.token_ttl_minutes)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    info!("[LOGIN] User authenticated");

    Ok(Json(TokenResponse::bearer(token)))
}

#[cfg(test)]
pub(crate) mod tests;
