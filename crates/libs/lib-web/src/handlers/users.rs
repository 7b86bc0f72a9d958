//! # User Handlers
//!
//! Per-user operations: superuser flag lookup and deletion. Both routes sit
//! behind the bearer-token middleware and fail with `404` for unknown ids.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use lib_core::{dto::SuperuserResponse, model::store::UserRepository, AppError, DbPool};
use tracing::{info, warn};
use uuid::Uuid;

/// Superuser check - returns the flag for the given user id.
pub async fn superuser_flag(
    State(pool): State<DbPool>,
    Path(id): Path<Uuid>,
) -> Result<Json<SuperuserResponse>, AppError> {
    let user = UserRepository::find_by_id(&pool, id)
        .await?
        .ok_or_else(|| {
            warn!("[USERS] Superuser check for unknown id {}", id);
            AppError::NotFound(format!("User {} not found", id))
        })?;

    Ok(Json(SuperuserResponse {
        is_superuser: user.is_superuser,
    }))
}

/// Delete handler - removes the user record entirely.
///
/// No soft delete and nothing cascades; the row is gone.
pub async fn delete_user(
    State(pool): State<DbPool>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if !UserRepository::exists_by_id(&pool, id).await? {
        warn!("[USERS] Delete for unknown id {}", id);
        return Err(AppError::NotFound(format!("User {} not found", id)));
    }

    UserRepository::delete_by_id(&pool, id).await?;
    info!("[USERS] Deleted user {}", id);

    Ok(StatusCode::NO_CONTENT)
}
