//! Collection handlers — CRUD plus cover-image upload.
//!
//! Uploads follow a plain two-step sequence: create (or load) the record,
//! push the binary to the object store, then attach the resulting public
//! URL to the record.

use axum::Json;
use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use bytes::Bytes;
use uuid::Uuid;

use curio_core::error::AppError;
use curio_entity::collection::{Collection, CreateCollection, UpdateCollection};

use crate::dto::response::ApiResponse;
use crate::extractors::CurrentUser;
use crate::state::AppState;

/// Fields accepted by the multipart create/update forms.
#[derive(Default)]
struct CollectionForm {
    title: Option<String>,
    description: Option<String>,
    category_id: Option<Uuid>,
    file: Option<UploadedFile>,
}

struct UploadedFile {
    name: String,
    content_type: Option<String>,
    data: Bytes,
}

/// POST /api/collections  (multipart/form-data)
pub async fn create_collection(
    State(state): State<AppState>,
    current: CurrentUser,
    multipart: Multipart,
) -> Result<(StatusCode, Json<ApiResponse<Collection>>), AppError> {
    let form = read_form(multipart).await?;

    let title = form
        .title
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| AppError::validation("title is required"))?;
    let category_id = form
        .category_id
        .ok_or_else(|| AppError::validation("category_id is required"))?;

    let collection = state
        .collection_repo
        .create(&CreateCollection {
            owner_id: current.id,
            category_id,
            title,
            description: form.description,
        })
        .await?;

    let collection = match form.file {
        Some(file) => attach_cover(&state, collection.id, file).await?,
        None => collection,
    };

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(collection))))
}

/// GET /api/collections
pub async fn list_collections(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Collection>>>, AppError> {
    let collections = state.collection_repo.find_all().await?;
    Ok(Json(ApiResponse::ok(collections)))
}

/// GET /api/collections/me
pub async fn list_my_collections(
    State(state): State<AppState>,
    current: CurrentUser,
) -> Result<Json<ApiResponse<Vec<Collection>>>, AppError> {
    let collections = state.collection_repo.find_by_owner(current.id).await?;
    Ok(Json(ApiResponse::ok(collections)))
}

/// GET /api/collections/{id}
pub async fn get_collection(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Collection>>, AppError> {
    let collection = state
        .collection_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Collection {id} not found")))?;

    Ok(Json(ApiResponse::ok(collection)))
}

/// PATCH /api/collections/{id}  (multipart/form-data)
pub async fn update_collection(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<Uuid>,
    multipart: Multipart,
) -> Result<Json<ApiResponse<Collection>>, AppError> {
    let existing = state
        .collection_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Collection {id} not found")))?;
    ensure_can_modify(&current, &existing)?;

    let form = read_form(multipart).await?;

    let image_url = match form.file {
        Some(file) => {
            let key = cover_key(id, &file.name);
            state
                .object_store
                .put(&key, file.data, file.content_type.as_deref())
                .await?;
            Some(state.object_store.public_url(&key))
        }
        None => None,
    };

    let collection = state
        .collection_repo
        .update(
            id,
            &UpdateCollection {
                title: form.title,
                description: form.description,
                category_id: form.category_id,
                image_url,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(collection)))
}

/// DELETE /api/collections/{id}
pub async fn delete_collection(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<serde_json::Value>>, AppError> {
    let existing = state
        .collection_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Collection {id} not found")))?;
    ensure_can_modify(&current, &existing)?;

    state.collection_repo.delete(id).await?;

    Ok(Json(ApiResponse::ok(
        serde_json::json!({ "message": "Collection deleted" }),
    )))
}

/// Only the owner or an admin may mutate a collection.
fn ensure_can_modify(current: &CurrentUser, collection: &Collection) -> Result<(), AppError> {
    if collection.owner_id != current.id && !current.is_admin {
        return Err(AppError::forbidden("Not the owner of this collection"));
    }
    Ok(())
}

/// Upload the cover image and attach its public URL to the collection.
async fn attach_cover(
    state: &AppState,
    collection_id: Uuid,
    file: UploadedFile,
) -> Result<Collection, AppError> {
    let key = cover_key(collection_id, &file.name);
    state
        .object_store
        .put(&key, file.data, file.content_type.as_deref())
        .await?;

    let url = state.object_store.public_url(&key);
    state
        .collection_repo
        .set_image_url(collection_id, &url)
        .await
}

fn cover_key(collection_id: Uuid, filename: &str) -> String {
    format!("collections/{}/{}", collection_id, sanitize_filename(filename))
}

/// Keep only filesystem- and URL-safe characters in uploaded file names.
fn sanitize_filename(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();

    if cleaned.trim_matches(['.', '_']).is_empty() {
        "upload.bin".to_string()
    } else {
        cleaned
    }
}

/// Drain the multipart body into a [`CollectionForm`].
async fn read_form(mut multipart: Multipart) -> Result<CollectionForm, AppError> {
    let mut form = CollectionForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Malformed multipart body: {e}")))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "title" => form.title = Some(read_text(field).await?),
            "description" => form.description = Some(read_text(field).await?),
            "category_id" => {
                let raw = read_text(field).await?;
                let id = raw
                    .parse::<Uuid>()
                    .map_err(|_| AppError::validation("Invalid category_id"))?;
                form.category_id = Some(id);
            }
            "file" => {
                let file_name = field
                    .file_name()
                    .unwrap_or("upload.bin")
                    .to_string();
                let content_type = field.content_type().map(String::from);
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::validation(format!("Failed to read upload: {e}")))?;
                form.file = Some(UploadedFile {
                    name: file_name,
                    content_type,
                    data,
                });
            }
            other => {
                tracing::debug!(field = other, "Ignoring unknown multipart field");
            }
        }
    }

    Ok(form)
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| AppError::validation(format!("Malformed multipart field: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("cover.png"), "cover.png");
        assert_eq!(sanitize_filename("my photo (1).png"), "my_photo__1_.png");
        assert_eq!(sanitize_filename("../../etc/passwd"), ".._.._etc_passwd");
        assert_eq!(sanitize_filename("..."), "upload.bin");
    }
}
