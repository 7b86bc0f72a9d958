//! # Password Hashing
//!
//! Argon2id hashing and verification. Strength rules are enforced by the
//! validators in `lib-utils`, not here; this module only hashes what it is
//! given.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PwdError {
    #[error("failed to hash password: {0}")]
    Hash(argon2::password_hash::Error),
    #[error("stored password hash is malformed: {0}")]
    MalformedHash(argon2::password_hash::Error),
}

/// Hash a plaintext password with Argon2id and a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, PwdError> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(PwdError::Hash)?;

    Ok(hash.to_string())
}

/// Verify a plaintext password against a stored Argon2 digest.
///
/// Returns `Ok(false)` on mismatch; errors only when the stored digest cannot
/// be parsed (which indicates corrupt data, not a bad password).
pub fn verify_password(password: &str, digest: &str) -> Result<bool, PwdError> {
    let parsed = PasswordHash::new(digest).map_err(PwdError::MalformedHash)?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}
