//! DTOs for file upload, download and listing.

use serde::{Deserialize, Serialize};

use crate::domain::entities::FileRecord;

/// Timestamp format used in file listings, e.g. `08/25/2026, 14:03:07`.
const LISTING_TIME_FORMAT: &str = "%m/%d/%Y, %H:%M:%S";

/// Response for a stored upload.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub id: i64,
    pub file_id: String,
}

/// Query parameters for the download endpoint.
#[derive(Debug, Deserialize)]
pub struct DownloadParams {
    pub id: String,
}

/// One file's metadata in a listing.
///
/// `id` carries the public `file_id`, not the database row id.
#[derive(Debug, Serialize)]
pub struct FileInfo {
    pub id: String,
    pub file_path: String,
    pub file_name: String,
    pub size: i64,
    pub created_at: String,
}

impl From<FileRecord> for FileInfo {
    fn from(record: FileRecord) -> Self {
        Self {
            id: record.file_id,
            file_path: record.file_path,
            file_name: record.file_name,
            size: record.size,
            created_at: record.created_at.format(LISTING_TIME_FORMAT).to_string(),
        }
    }
}

/// Response listing all stored files.
#[derive(Debug, Serialize)]
pub struct FilesResponse {
    pub files: Vec<FileInfo>,
}
