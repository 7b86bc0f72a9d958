//! # User DTOs
//!
//! Public views of user records. These intentionally exclude the password
//! hash; nothing in this module can leak a credential.

use crate::model::store::models::User;
use lib_utils::format_time;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Public user fields, safe to send to clients.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserPublic {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub is_superuser: bool,
    pub created_at: String,
}

impl From<&User> for UserPublic {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            is_superuser: user.is_superuser,
            created_at: format_time(user.created_at),
        }
    }
}

/// Response body for the superuser check.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SuperuserResponse {
    pub is_superuser: bool,
}
