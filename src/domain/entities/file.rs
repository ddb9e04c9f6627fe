//! Stored file metadata entity.

use chrono::{DateTime, Utc};

/// Metadata for an uploaded file.
///
/// `file_id` is the public handle (UUID v4) used for downloads; the numeric
/// `id` stays internal. The blob itself lives in the object store under
/// `file_id`, not in the database.
#[derive(Debug, Clone)]
pub struct FileRecord {
    pub id: i64,
    pub file_id: String,
    pub file_path: String,
    pub file_name: String,
    pub size: i64,
    pub is_downloadable: bool,
    pub created_at: DateTime<Utc>,
}

/// Input data for registering an uploaded file.
#[derive(Debug, Clone)]
pub struct NewFileRecord {
    pub file_id: String,
    pub file_path: String,
    pub file_name: String,
    pub size: i64,
    pub is_downloadable: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_file_record() {
        let record = FileRecord {
            id: 3,
            file_id: "550e8400-e29b-41d4-a716-446655440000".to_string(),
            file_path: "reports".to_string(),
            file_name: "summary.pdf".to_string(),
            size: 2048,
            is_downloadable: true,
            created_at: Utc::now(),
        };

        assert_eq!(record.file_name, "summary.pdf");
        assert_eq!(record.size, 2048);
        assert!(record.is_downloadable);
    }
}
