//! Repository trait for uploaded file metadata.

use crate::domain::entities::{FileRecord, NewFileRecord};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for file metadata.
///
/// Only metadata lives here; the bytes themselves go through
/// [`crate::infrastructure::object_store::ObjectStore`].
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgFileRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::memory::InMemoryFileRepository`] - in-memory test double
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FileRepository: Send + Sync {
    /// Registers metadata for an uploaded file.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] or [`AppError::Internal`] on
    /// database errors.
    async fn create(&self, new_file: NewFileRecord) -> Result<FileRecord, AppError>;

    /// Finds a file by its public id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] or [`AppError::Internal`] on
    /// database errors.
    async fn find_by_file_id(&self, file_id: &str) -> Result<Option<FileRecord>, AppError>;

    /// Lists all stored files ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] or [`AppError::Internal`] on
    /// database errors.
    async fn list(&self) -> Result<Vec<FileRecord>, AppError>;
}
