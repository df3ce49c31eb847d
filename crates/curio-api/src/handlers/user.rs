//! User administration handlers.
//!
//! Blocking is enforced by the token guard on the target's next guarded
//! request; nothing here invalidates outstanding tokens directly.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use curio_core::error::AppError;

use crate::dto::request::ChangeRoleRequest;
use crate::dto::response::{ApiResponse, UserResponse};
use crate::extractors::AdminUser;
use crate::state::AppState;

/// GET /api/users  (admin)
pub async fn list_users(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> Result<Json<ApiResponse<Vec<UserResponse>>>, AppError> {
    let users = state.user_repo.find_all().await?;
    let users = users.into_iter().map(UserResponse::from).collect();
    Ok(Json(ApiResponse::ok(users)))
}

/// PATCH /api/users/{id}/block  (admin)
pub async fn block_user(
    State(state): State<AppState>,
    admin: AdminUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<UserResponse>>, AppError> {
    let user = state.user_repo.set_blocked(id, true).await?;
    tracing::info!(user_id = %id, admin_id = %admin.0.id, "User blocked");
    Ok(Json(ApiResponse::ok(UserResponse::from(user))))
}

/// PATCH /api/users/{id}/unblock  (admin)
pub async fn unblock_user(
    State(state): State<AppState>,
    admin: AdminUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<UserResponse>>, AppError> {
    let user = state.user_repo.set_blocked(id, false).await?;
    tracing::info!(user_id = %id, admin_id = %admin.0.id, "User unblocked");
    Ok(Json(ApiResponse::ok(UserResponse::from(user))))
}

/// PATCH /api/users/{id}/role  (admin)
pub async fn change_role(
    State(state): State<AppState>,
    admin: AdminUser,
    Path(id): Path<Uuid>,
    Json(req): Json<ChangeRoleRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, AppError> {
    let user = state.user_repo.set_admin(id, req.is_admin).await?;
    tracing::info!(
        user_id = %id,
        admin_id = %admin.0.id,
        is_admin = req.is_admin,
        "User role changed"
    );
    Ok(Json(ApiResponse::ok(UserResponse::from(user))))
}

/// DELETE /api/users/{id}  (admin)
pub async fn delete_user(
    State(state): State<AppState>,
    admin: AdminUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<serde_json::Value>>, AppError> {
    let deleted = state.user_repo.delete(id).await?;
    if !deleted {
        return Err(AppError::not_found(format!("User {id} not found")));
    }

    tracing::info!(user_id = %id, admin_id = %admin.0.id, "User deleted");
    Ok(Json(ApiResponse::ok(
        serde_json::json!({ "message": "User deleted" }),
    )))
}
