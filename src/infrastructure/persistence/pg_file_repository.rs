//! PostgreSQL implementation of the file metadata repository.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use std::sync::Arc;

use crate::domain::entities::{FileRecord, NewFileRecord};
use crate::domain::repositories::FileRepository;
use crate::error::AppError;

/// PostgreSQL repository for uploaded file metadata.
pub struct PgFileRepository {
    pool: Arc<PgPool>,
}

impl PgFileRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

fn map_row(row: &PgRow) -> Result<FileRecord, AppError> {
    Ok(FileRecord {
        id: row.try_get("id")?,
        file_id: row.try_get("file_id")?,
        file_path: row.try_get("file_path")?,
        file_name: row.try_get("file_name")?,
        size: row.try_get("size")?,
        is_downloadable: row.try_get("is_downloadable")?,
        created_at: row.try_get("created_at")?,
    })
}

#[async_trait]
impl FileRepository for PgFileRepository {
    async fn create(&self, new_file: NewFileRecord) -> Result<FileRecord, AppError> {
        let row = sqlx::query(
            r#"
            INSERT INTO files (file_id, file_path, file_name, size, is_downloadable)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, file_id, file_path, file_name, size, is_downloadable, created_at
            "#,
        )
        .bind(&new_file.file_id)
        .bind(&new_file.file_path)
        .bind(&new_file.file_name)
        .bind(new_file.size)
        .bind(new_file.is_downloadable)
        .fetch_one(self.pool.as_ref())
        .await?;

        map_row(&row)
    }

    async fn find_by_file_id(&self, file_id: &str) -> Result<Option<FileRecord>, AppError> {
        let row = sqlx::query(
            r#"
            SELECT id, file_id, file_path, file_name, size, is_downloadable, created_at
            FROM files
            WHERE file_id = $1
            "#,
        )
        .bind(file_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.as_ref().map(map_row).transpose()
    }

    async fn list(&self) -> Result<Vec<FileRecord>, AppError> {
        let rows = sqlx::query(
            r#"
            SELECT id, file_id, file_path, file_name, size, is_downloadable, created_at
            FROM files
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        rows.iter().map(map_row).collect()
    }
}
