//! # User Repository
//!
//! Data access for user records over a SQLite pool.
//!
//! All methods are async and return `Result<_, sqlx::Error>`; absence is
//! reported as `false`/`None`, never as an error. Username and email
//! uniqueness is enforced by UNIQUE constraints in the schema, so a
//! concurrent duplicate insert fails here with a constraint violation rather
//! than slipping past the gateway's pre-checks.

use super::models::User;
use super::DbPool;
use lib_utils::now_utc;
use sqlx::{query, query_as, query_scalar};
use uuid::Uuid;

/// Repository for user records.
pub struct UserRepository;

impl UserRepository {
    /// Check whether any user has the given email.
    pub async fn exists_by_email(pool: &DbPool, email: &str) -> Result<bool, sqlx::Error> {
        query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE email = ?)")
            .bind(email)
            .fetch_one(pool)
            .await
    }

    /// Check whether any user has the given username.
    pub async fn exists_by_username(pool: &DbPool, username: &str) -> Result<bool, sqlx::Error> {
        query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE username = ?)")
            .bind(username)
            .fetch_one(pool)
            .await
    }

    /// Check whether a user with the given id exists.
    pub async fn exists_by_id(pool: &DbPool, id: Uuid) -> Result<bool, sqlx::Error> {
        query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE id = ?)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Find a user by username.
    pub async fn find_by_username(
        pool: &DbPool,
        username: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        query_as::<_, User>("SELECT * FROM users WHERE username = ?")
            .bind(username)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by id.
    pub async fn find_by_id(pool: &DbPool, id: Uuid) -> Result<Option<User>, sqlx::Error> {
        query_as::<_, User>("SELECT * FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Create a new user with a freshly generated id.
    ///
    /// `password_hash` must already be hashed; this layer never sees
    /// plaintext. Fails with a database UNIQUE violation if the username or
    /// email is already taken.
    pub async fn create(
        pool: &DbPool,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User, sqlx::Error> {
        let id = Uuid::new_v4();
        let now = now_utc();

        query(
            "INSERT INTO users (id, username, email, password_hash, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(id)
        .bind(username)
        .bind(email)
        .bind(password_hash)
        .bind(now)
        .bind(now)
        .execute(pool)
        .await?;

        query_as::<_, User>("SELECT * FROM users WHERE id = ?")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Delete the user with the given id.
    ///
    /// Returns `true` if a record was removed, `false` if the id was unknown.
    pub async fn delete_by_id(pool: &DbPool, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
