//! PostgreSQL implementation of the health repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::repositories::HealthRepository;
use crate::error::AppError;

/// PostgreSQL liveness probe.
pub struct PgHealthRepository {
    pool: Arc<PgPool>,
}

impl PgHealthRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HealthRepository for PgHealthRepository {
    async fn ping(&self) -> Result<bool, AppError> {
        let ready: bool = sqlx::query_scalar("SELECT true")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(ready)
    }
}
