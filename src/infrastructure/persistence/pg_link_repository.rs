//! PostgreSQL implementation of link repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use std::sync::Arc;

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::domain::repositories::LinkRepository;
use crate::error::{AppError, is_unique_violation};

/// PostgreSQL repository for short link storage and retrieval.
///
/// Uses SQLx prepared statements for SQL injection protection. The unique
/// index on `url_short` is the authoritative collision guard.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

fn map_row(row: &PgRow) -> Result<ShortLink, AppError> {
    Ok(ShortLink {
        id: row.try_get("id")?,
        original_url: row.try_get("url_original")?,
        short_code: row.try_get("url_short")?,
        created_at: row.try_get("created_at")?,
        deleted: row.try_get("deleted")?,
    })
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn create(&self, new_link: NewShortLink) -> Result<ShortLink, AppError> {
        let result = sqlx::query(
            r#"
            INSERT INTO urls (url_original, url_short)
            VALUES ($1, $2)
            RETURNING id, url_original, url_short, created_at, deleted
            "#,
        )
        .bind(&new_link.original_url)
        .bind(&new_link.short_code)
        .fetch_one(self.pool.as_ref())
        .await;

        match result {
            Ok(row) => map_row(&row),
            Err(e) if is_unique_violation(&e) => Err(AppError::creation_failed(
                "New item was not generated properly",
                json!({ "code": new_link.short_code }),
            )),
            Err(e) => Err(e.into()),
        }
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<ShortLink>, AppError> {
        let row = sqlx::query(
            r#"
            SELECT id, url_original, url_short, created_at, deleted
            FROM urls
            WHERE url_short = $1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.as_ref().map(map_row).transpose()
    }

    async fn mark_deleted(&self, code: &str) -> Result<bool, AppError> {
        let result = sqlx::query("UPDATE urls SET deleted = TRUE WHERE url_short = $1")
            .bind(code)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
