//! # curio-storage
//!
//! Object storage backends for uploaded binary assets. Implements the
//! [`ObjectStore`] trait from `curio-core` for the local filesystem and
//! S3-compatible services.

pub mod providers;

use std::sync::Arc;

use curio_core::config::storage::StorageConfig;
use curio_core::error::AppError;
use curio_core::result::AppResult;
use curio_core::traits::ObjectStore;

use providers::local::LocalObjectStore;
use providers::s3::S3ObjectStore;

/// Build the object store selected by configuration.
pub async fn build_store(config: &StorageConfig) -> AppResult<Arc<dyn ObjectStore>> {
    match config.provider.as_str() {
        "local" => {
            let store =
                LocalObjectStore::new(&config.local.root_path, config.public_base_url.clone())
                    .await?;
            Ok(Arc::new(store))
        }
        "s3" => {
            let store = S3ObjectStore::new(&config.s3, config.public_base_url.clone()).await?;
            Ok(Arc::new(store))
        }
        other => Err(AppError::configuration(format!(
            "Unknown storage provider: '{other}'"
        ))),
    }
}
