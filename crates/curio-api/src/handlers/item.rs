//! Item handlers — CRUD within a collection.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;
use validator::Validate;

use curio_core::error::AppError;
use curio_entity::collection::Collection;
use curio_entity::item::{CreateItem, Item, UpdateItem};

use crate::dto::request::{CreateItemRequest, UpdateItemRequest};
use crate::dto::response::ApiResponse;
use crate::extractors::CurrentUser;
use crate::state::AppState;

/// GET /api/collections/{id}/items
pub async fn list_items(
    State(state): State<AppState>,
    Path(collection_id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<Item>>>, AppError> {
    // 404 for a missing collection rather than an empty list.
    load_collection(&state, collection_id).await?;

    let items = state.item_repo.find_by_collection(collection_id).await?;
    Ok(Json(ApiResponse::ok(items)))
}

/// POST /api/collections/{id}/items
pub async fn create_item(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(collection_id): Path<Uuid>,
    Json(req): Json<CreateItemRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Item>>), AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let collection = load_collection(&state, collection_id).await?;
    ensure_can_modify(&current, &collection)?;

    let item = state
        .item_repo
        .create(&CreateItem {
            collection_id,
            name: req.name,
            description: req.description,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(item))))
}

/// GET /api/items/{id}
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Item>>, AppError> {
    let item = state
        .item_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Item {id} not found")))?;

    Ok(Json(ApiResponse::ok(item)))
}

/// PATCH /api/items/{id}
pub async fn update_item(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateItemRequest>,
) -> Result<Json<ApiResponse<Item>>, AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let item = state
        .item_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Item {id} not found")))?;
    let collection = load_collection(&state, item.collection_id).await?;
    ensure_can_modify(&current, &collection)?;

    let item = state
        .item_repo
        .update(
            id,
            &UpdateItem {
                name: req.name,
                description: req.description,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(item)))
}

/// DELETE /api/items/{id}
pub async fn delete_item(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<serde_json::Value>>, AppError> {
    let item = state
        .item_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Item {id} not found")))?;
    let collection = load_collection(&state, item.collection_id).await?;
    ensure_can_modify(&current, &collection)?;

    state.item_repo.delete(id).await?;

    Ok(Json(ApiResponse::ok(
        serde_json::json!({ "message": "Item deleted" }),
    )))
}

async fn load_collection(state: &AppState, id: Uuid) -> Result<Collection, AppError> {
    state
        .collection_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Collection {id} not found")))
}

/// Only the owner of the parent collection or an admin may mutate items.
fn ensure_can_modify(current: &CurrentUser, collection: &Collection) -> Result<(), AppError> {
    if collection.owner_id != current.id && !current.is_admin {
        return Err(AppError::forbidden("Not the owner of this collection"));
    }
    Ok(())
}
