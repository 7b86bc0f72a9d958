//! Test helpers and suites for the auth handlers.
//!
//! - `register`: registration status codes, conflict ordering, validation
//! - `login`: credential verification and the uniform 401 shape
//! - `integration`: full register-then-login flows

mod integration;
mod login;

use crate::server::AppState;
use axum::routing::post;
use axum::Router;
use lib_core::{Config, DbPool};
use sqlx::sqlite::SqlitePoolOptions;

/// Pre-computed Argon2 digest shape for tests that never verify it.
pub(crate) const FAKE_HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$c2FsdHNhbHQ$ZmFrZWhhc2g";

/// In-memory database with the users schema applied.
pub(crate) async fn setup_test_db() -> DbPool {
    let pool = SqlitePoolOptions::new()
        .connect("sqlite::memory:")
        .await
        .expect("in-memory database should open");

    sqlx::query(
        r#"
        CREATE TABLE users (
            id TEXT PRIMARY KEY,
            username TEXT NOT NULL UNIQUE,
            email TEXT NOT NULL UNIQUE,
            password_hash TEXT NOT NULL,
            is_superuser BOOLEAN NOT NULL DEFAULT 0,
            created_at TIMESTAMP NOT NULL,
            updated_at TIMESTAMP NOT NULL
        )
        "#,
    )
    .execute(&pool)
    .await
    .expect("users table should create");

    pool
}

pub(crate) fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        jwt_secret: "test-secret-test-secret-test-secret!".to_string(),
        token_ttl_minutes: 30,
    }
}

/// Router with just the auth routes, backed by real state.
pub(crate) fn test_app(pool: DbPool, config: Config) -> Router {
    let state = AppState { db: pool, config };

    Router::new()
        .route("/api/auth/register", post(super::register))
        .route("/api/auth/login", post(super::login))
        .with_state(state)
}
