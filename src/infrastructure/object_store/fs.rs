//! Filesystem-backed blob store.

use async_trait::async_trait;
use serde_json::json;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::error::AppError;
use crate::infrastructure::object_store::ObjectStore;

/// [`ObjectStore`] writing each blob as a file under a root directory.
///
/// Blob ids are UUIDs generated by the upload path, so they map to flat
/// file names without any path handling.
pub struct FsObjectStore {
    root: PathBuf,
}

impl FsObjectStore {
    /// Creates a store rooted at `root`. The directory is created lazily
    /// on the first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn blob_path(&self, id: &str) -> PathBuf {
        self.root.join(id)
    }
}

#[async_trait]
impl ObjectStore for FsObjectStore {
    async fn put(&self, id: &str, bytes: &[u8]) -> Result<(), AppError> {
        tokio::fs::create_dir_all(&self.root).await.map_err(|e| {
            AppError::unavailable(
                "File storage unavailable",
                json!({ "error": e.to_string() }),
            )
        })?;

        tokio::fs::write(self.blob_path(id), bytes).await.map_err(|e| {
            AppError::unavailable(
                "File storage unavailable",
                json!({ "error": e.to_string() }),
            )
        })
    }

    async fn get(&self, id: &str) -> Result<Option<Vec<u8>>, AppError> {
        match tokio::fs::read(self.blob_path(id)).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::unavailable(
                "File storage unavailable",
                json!({ "error": e.to_string() }),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_put_and_get() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsObjectStore::new(dir.path());

        store.put("blob-1", b"contents").await.unwrap();

        let bytes = store.get("blob-1").await.unwrap().unwrap();
        assert_eq!(bytes, b"contents");
    }

    #[tokio::test]
    async fn test_get_missing_blob() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsObjectStore::new(dir.path());

        assert!(store.get("blob-1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_put_creates_root_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsObjectStore::new(dir.path().join("nested").join("files"));

        store.put("blob-1", b"x").await.unwrap();

        assert_eq!(store.get("blob-1").await.unwrap().unwrap(), b"x");
    }

    #[tokio::test]
    async fn test_get_missing_root_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsObjectStore::new(dir.path().join("never-created"));

        assert!(store.get("blob-1").await.unwrap().is_none());
    }
}
