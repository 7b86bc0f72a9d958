//! # Bearer Token Management
//!
//! HS256 JWT issuance and verification. Tokens are stateless: nothing is
//! stored server-side, and validity is determined purely by signature and
//! expiry at decode time.

use chrono::Duration;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use lib_utils::now_utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Claims carried by a session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the username the token is bound to
    pub sub: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration (Unix timestamp)
    pub exp: i64,
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("failed to sign token: {0}")]
    Sign(jsonwebtoken::errors::Error),
    #[error("invalid or expired token: {0}")]
    Verify(jsonwebtoken::errors::Error),
}

/// Issue a signed bearer token bound to `username`, expiring `ttl_minutes`
/// from now.
pub fn issue_token(username: &str, secret: &str, ttl_minutes: i64) -> Result<String, TokenError> {
    let now = now_utc();
    let exp = now + Duration::minutes(ttl_minutes);

    let claims = Claims {
        sub: username.to_string(),
        iat: now.timestamp(),
        exp: exp.timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(TokenError::Sign)
}

/// Decode and verify a bearer token, returning its claims.
pub fn decode_token(token: &str, secret: &str) -> Result<Claims, TokenError> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(TokenError::Verify)?;

    Ok(data.claims)
}
