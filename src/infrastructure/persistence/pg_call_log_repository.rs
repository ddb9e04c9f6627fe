//! PostgreSQL implementation of the call log repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::repositories::CallLogRepository;
use crate::error::AppError;

/// PostgreSQL repository for resolution accounting.
///
/// `urllogger` rows are only ever inserted and counted, never updated.
pub struct PgCallLogRepository {
    pool: Arc<PgPool>,
}

impl PgCallLogRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CallLogRepository for PgCallLogRepository {
    async fn record(&self, short_code: &str) -> Result<(), AppError> {
        sqlx::query("INSERT INTO urllogger (url_short) VALUES ($1)")
            .bind(short_code)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }

    async fn count_by_code(&self, short_code: &str) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM urllogger WHERE url_short = $1")
            .bind(short_code)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
