//! Collection entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A user-owned collection of items.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Collection {
    /// Unique collection identifier.
    pub id: Uuid,
    /// The user who owns this collection.
    pub owner_id: Uuid,
    /// The category this collection belongs to.
    pub category_id: Uuid,
    /// Collection title.
    pub title: String,
    /// Free-form description.
    pub description: Option<String>,
    /// Public URL of the cover image, if one was uploaded.
    pub image_url: Option<String>,
    /// When the collection was created.
    pub created_at: DateTime<Utc>,
    /// When the collection was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCollection {
    /// Owning user.
    pub owner_id: Uuid,
    /// Category.
    pub category_id: Uuid,
    /// Title.
    pub title: String,
    /// Description (optional).
    pub description: Option<String>,
}

/// Data for updating an existing collection. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateCollection {
    /// New title.
    pub title: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New category.
    pub category_id: Option<Uuid>,
    /// New cover image URL.
    pub image_url: Option<String>,
}
