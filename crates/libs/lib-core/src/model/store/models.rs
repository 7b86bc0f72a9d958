use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// User entity: a complete user record from the database.
///
/// Carries the password hash; never serialize this type to a client. Use
/// [`crate::dto::UserPublic`] for anything outward-facing.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub is_superuser: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
