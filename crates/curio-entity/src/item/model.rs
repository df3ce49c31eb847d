//! Item entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A single item inside a collection.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Item {
    /// Unique item identifier.
    pub id: Uuid,
    /// The collection this item belongs to.
    pub collection_id: Uuid,
    /// Item name.
    pub name: String,
    /// Free-form description.
    pub description: Option<String>,
    /// When the item was created.
    pub created_at: DateTime<Utc>,
    /// When the item was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateItem {
    /// Parent collection.
    pub collection_id: Uuid,
    /// Name.
    pub name: String,
    /// Description (optional).
    pub description: Option<String>,
}

/// Data for updating an existing item. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateItem {
    /// New name.
    pub name: Option<String>,
    /// New description.
    pub description: Option<String>,
}
