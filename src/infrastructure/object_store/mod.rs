//! Blob storage behind the file upload endpoints.

mod fs;

pub use fs::FsObjectStore;

use async_trait::async_trait;

use crate::error::AppError;

/// Store for uploaded file contents, keyed by the file's public id.
///
/// Metadata lives in the database; this trait only moves bytes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Writes the blob under `id`, replacing any previous content.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] when the backing storage rejects
    /// the write.
    ///
    /// [`AppError::Unavailable`]: crate::error::AppError::Unavailable
    async fn put(&self, id: &str, bytes: &[u8]) -> Result<(), AppError>;

    /// Reads the blob stored under `id`, or `None` when it was never written.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] when the backing storage cannot be
    /// read.
    ///
    /// [`AppError::Unavailable`]: crate::error::AppError::Unavailable
    async fn get(&self, id: &str) -> Result<Option<Vec<u8>>, AppError>;
}
