//! File upload, download, and listing.

use std::sync::Arc;

use crate::domain::entities::{FileRecord, NewFileRecord};
use crate::domain::repositories::FileRepository;
use crate::error::AppError;
use crate::infrastructure::object_store::ObjectStore;
use serde_json::json;
use uuid::Uuid;

/// Service for stored files.
///
/// Metadata lives in the relational store, bytes in the object store, keyed
/// by the generated `file_id`. Upload writes the metadata row first; a blob
/// write failure leaves a row whose download answers 404 until the blob
/// appears.
pub struct FileService {
    files: Arc<dyn FileRepository>,
    store: Arc<dyn ObjectStore>,
}

impl FileService {
    /// Creates a new file service.
    pub fn new(files: Arc<dyn FileRepository>, store: Arc<dyn ObjectStore>) -> Self {
        Self { files, store }
    }

    /// Stores an uploaded file.
    ///
    /// Assigns a fresh UUID v4 as the public `file_id`, records metadata,
    /// then writes the bytes to the object store under that id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] if the database or the object
    /// store cannot be written, [`AppError::Internal`] on other database
    /// errors.
    pub async fn upload(
        &self,
        file_path: String,
        file_name: String,
        bytes: Vec<u8>,
    ) -> Result<FileRecord, AppError> {
        let file_id = Uuid::new_v4().to_string();

        let new_file = NewFileRecord {
            file_id: file_id.clone(),
            file_path,
            file_name,
            size: bytes.len() as i64,
            is_downloadable: true,
        };

        let record = self.files.create(new_file).await?;
        self.store.put(&file_id, &bytes).await?;

        Ok(record)
    }

    /// Loads a file's metadata and bytes by its public id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no metadata row matches the id or
    /// the blob is missing from the object store, [`AppError::Unavailable`]
    /// or [`AppError::Internal`] on storage errors.
    pub async fn download(&self, file_id: &str) -> Result<(FileRecord, Vec<u8>), AppError> {
        let record = self
            .files
            .find_by_file_id(file_id)
            .await?
            .ok_or_else(|| AppError::not_found("File not found", json!({ "id": file_id })))?;

        let bytes = self
            .store
            .get(file_id)
            .await?
            .ok_or_else(|| AppError::not_found("File not found", json!({ "id": file_id })))?;

        Ok((record, bytes))
    }

    /// Lists metadata for all stored files.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] or [`AppError::Internal`] on
    /// database errors.
    pub async fn list(&self) -> Result<Vec<FileRecord>, AppError> {
        self.files.list().await
    }
}
