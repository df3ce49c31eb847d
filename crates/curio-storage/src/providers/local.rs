//! Local filesystem object store.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;
use tokio::fs;
use tracing::debug;

use curio_core::error::{AppError, ErrorKind};
use curio_core::result::AppResult;
use curio_core::traits::ObjectStore;

/// Object store backed by a local directory.
///
/// Public URLs are built from `public_base_url`; serving the directory over
/// HTTP is left to the deployment (reverse proxy or a static file server).
#[derive(Debug, Clone)]
pub struct LocalObjectStore {
    /// Root directory for all stored objects.
    root: PathBuf,
    /// Base URL prepended to keys when building public URLs.
    public_base_url: String,
}

impl LocalObjectStore {
    /// Create a new local object store rooted at the given path.
    pub async fn new(root_path: &str, public_base_url: Option<String>) -> AppResult<Self> {
        let root = PathBuf::from(root_path);
        fs::create_dir_all(&root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create storage root: {}", root.display()),
                e,
            )
        })?;
        Ok(Self {
            root,
            public_base_url: public_base_url.unwrap_or_else(|| "/files".to_string()),
        })
    }

    /// Resolve a key to an absolute path within the root.
    fn resolve(&self, key: &str) -> PathBuf {
        let clean = key.trim_start_matches('/');
        self.root.join(clean)
    }

    /// Ensure the parent directory of a path exists.
    async fn ensure_parent(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to create parent directory: {}", parent.display()),
                    e,
                )
            })?;
        }
        Ok(())
    }
}

#[async_trait]
impl ObjectStore for LocalObjectStore {
    fn provider_type(&self) -> &str {
        "local"
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(self.root.exists() && self.root.is_dir())
    }

    async fn put(&self, key: &str, data: Bytes, _content_type: Option<&str>) -> AppResult<()> {
        let full_path = self.resolve(key);
        self.ensure_parent(&full_path).await?;

        fs::write(&full_path, &data).await.map_err(|e| {
            AppError::with_source(ErrorKind::Storage, format!("Failed to write object: {key}"), e)
        })?;

        debug!(key, bytes = data.len(), "Stored object");
        Ok(())
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        let full_path = self.resolve(key);
        match fs::remove_file(&full_path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to delete object: {key}"),
                e,
            )),
        }
    }

    async fn exists(&self, key: &str) -> AppResult<bool> {
        let full_path = self.resolve(key);
        fs::try_exists(&full_path).await.map_err(|e| {
            AppError::with_source(ErrorKind::Storage, format!("Failed to stat object: {key}"), e)
        })
    }

    fn public_url(&self, key: &str) -> String {
        format!(
            "{}/{}",
            self.public_base_url.trim_end_matches('/'),
            key.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn store_in(dir: &tempfile::TempDir) -> LocalObjectStore {
        LocalObjectStore::new(
            dir.path().to_str().unwrap(),
            Some("https://cdn.example.com/assets".to_string()),
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_put_exists_delete_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir).await;

        store
            .put("collections/abc/cover.png", Bytes::from_static(b"png"), Some("image/png"))
            .await
            .unwrap();
        assert!(store.exists("collections/abc/cover.png").await.unwrap());

        store.delete("collections/abc/cover.png").await.unwrap();
        assert!(!store.exists("collections/abc/cover.png").await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_missing_key_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir).await;
        assert!(store.delete("nope/missing.bin").await.is_ok());
    }

    #[tokio::test]
    async fn test_public_url_joins_cleanly() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir).await;
        assert_eq!(
            store.public_url("/collections/abc/cover.png"),
            "https://cdn.example.com/assets/collections/abc/cover.png"
        );
    }
}
