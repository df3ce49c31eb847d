//! Collection repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use curio_core::error::{AppError, ErrorKind};
use curio_core::result::AppResult;
use curio_entity::collection::{Collection, CreateCollection, UpdateCollection};

/// Repository for collection CRUD and query operations.
#[derive(Debug, Clone)]
pub struct CollectionRepository {
    pool: PgPool,
}

impl CollectionRepository {
    /// Create a new collection repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a collection by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Collection>> {
        sqlx::query_as::<_, Collection>("SELECT * FROM collections WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find collection by id", e)
            })
    }

    /// List all collections, newest first.
    pub async fn find_all(&self) -> AppResult<Vec<Collection>> {
        sqlx::query_as::<_, Collection>("SELECT * FROM collections ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list collections", e)
            })
    }

    /// List collections owned by the given user.
    pub async fn find_by_owner(&self, owner_id: Uuid) -> AppResult<Vec<Collection>> {
        sqlx::query_as::<_, Collection>(
            "SELECT * FROM collections WHERE owner_id = $1 ORDER BY created_at DESC",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list collections by owner", e)
        })
    }

    /// Create a new collection.
    pub async fn create(&self, data: &CreateCollection) -> AppResult<Collection> {
        sqlx::query_as::<_, Collection>(
            "INSERT INTO collections (owner_id, category_id, title, description) \
             VALUES ($1, $2, $3, $4) \
             RETURNING *",
        )
        .bind(data.owner_id)
        .bind(data.category_id)
        .bind(&data.title)
        .bind(&data.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("collections_category_id_fkey") =>
            {
                AppError::validation("Unknown category")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create collection", e),
        })
    }

    /// Update a collection's fields. `None` fields are left unchanged.
    pub async fn update(&self, id: Uuid, data: &UpdateCollection) -> AppResult<Collection> {
        sqlx::query_as::<_, Collection>(
            "UPDATE collections SET title = COALESCE($2, title), \
                                    description = COALESCE($3, description), \
                                    category_id = COALESCE($4, category_id), \
                                    image_url = COALESCE($5, image_url), \
                                    updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.title)
        .bind(&data.description)
        .bind(data.category_id)
        .bind(&data.image_url)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update collection", e))?
        .ok_or_else(|| AppError::not_found(format!("Collection {id} not found")))
    }

    /// Attach the uploaded cover image URL to a collection.
    pub async fn set_image_url(&self, id: Uuid, image_url: &str) -> AppResult<Collection> {
        sqlx::query_as::<_, Collection>(
            "UPDATE collections SET image_url = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(image_url)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to set image url", e))?
        .ok_or_else(|| AppError::not_found(format!("Collection {id} not found")))
    }

    /// Delete a collection. Returns `true` if a row was removed.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM collections WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete collection", e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
