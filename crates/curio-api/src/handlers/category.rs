//! Category handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;
use validator::Validate;

use curio_core::error::AppError;
use curio_entity::category::{Category, CreateCategory};

use crate::dto::request::CreateCategoryRequest;
use crate::dto::response::ApiResponse;
use crate::extractors::AdminUser;
use crate::state::AppState;

/// GET /api/categories
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Category>>>, AppError> {
    let categories = state.category_repo.find_all().await?;
    Ok(Json(ApiResponse::ok(categories)))
}

/// POST /api/categories  (admin)
pub async fn create_category(
    State(state): State<AppState>,
    _admin: AdminUser,
    Json(req): Json<CreateCategoryRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Category>>), AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let slug = match req.slug {
        Some(slug) if !slug.is_empty() => slug,
        _ => slugify(&req.name),
    };

    let category = state
        .category_repo
        .create(&CreateCategory {
            name: req.name,
            slug,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(category))))
}

/// DELETE /api/categories/{id}  (admin)
pub async fn delete_category(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<serde_json::Value>>, AppError> {
    let deleted = state.category_repo.delete(id).await?;
    if !deleted {
        return Err(AppError::not_found(format!("Category {id} not found")));
    }

    Ok(Json(ApiResponse::ok(
        serde_json::json!({ "message": "Category deleted" }),
    )))
}

/// Derive a URL-safe slug from a display name.
fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut last_dash = true;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_dash = false;
        } else if !last_dash {
            slug.push('-');
            last_dash = true;
        }
    }
    slug.trim_end_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::slugify;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Vinyl Records"), "vinyl-records");
        assert_eq!(slugify("  Rare   Coins! "), "rare-coins");
        assert_eq!(slugify("Art"), "art");
    }
}
