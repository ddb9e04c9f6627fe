//! PostgreSQL implementation of the token repository.

use async_trait::async_trait;
use sqlx::{PgPool, Row};
use std::sync::Arc;

use crate::domain::entities::User;
use crate::domain::repositories::{AuthToken, TokenRepository};
use crate::error::AppError;

/// PostgreSQL repository for issued access tokens.
pub struct PgTokenRepository {
    pool: Arc<PgPool>,
}

impl PgTokenRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TokenRepository for PgTokenRepository {
    async fn create(&self, user_id: i64, token_hash: &str) -> Result<AuthToken, AppError> {
        let row = sqlx::query(
            r#"
            INSERT INTO tokens (user_id, token_hash)
            VALUES ($1, $2)
            RETURNING id, user_id, token_hash, created_at
            "#,
        )
        .bind(user_id)
        .bind(token_hash)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(AuthToken {
            id: row.try_get("id")?,
            user_id: row.try_get("user_id")?,
            token_hash: row.try_get("token_hash")?,
            created_at: row.try_get("created_at")?,
        })
    }

    async fn find_owner(&self, token_hash: &str) -> Result<Option<User>, AppError> {
        let row = sqlx::query(
            r#"
            SELECT u.id, u.user_name, u.secret_hash, u.disabled, u.account_id, u.created_at
            FROM tokens t
            JOIN users u ON u.id = t.user_id
            WHERE t.token_hash = $1
            "#,
        )
        .bind(token_hash)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(|r| {
            Ok(User {
                id: r.try_get("id")?,
                user_name: r.try_get("user_name")?,
                secret_hash: r.try_get("secret_hash")?,
                disabled: r.try_get("disabled")?,
                account_id: r.try_get("account_id")?,
                created_at: r.try_get("created_at")?,
            })
        })
        .transpose()
    }
}
