//! PostgreSQL implementation of the user repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use std::sync::Arc;

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::{AppError, is_unique_violation};

/// PostgreSQL repository for user accounts.
pub struct PgUserRepository {
    pool: Arc<PgPool>,
}

impl PgUserRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

fn map_row(row: &PgRow) -> Result<User, AppError> {
    Ok(User {
        id: row.try_get("id")?,
        user_name: row.try_get("user_name")?,
        secret_hash: row.try_get("secret_hash")?,
        disabled: row.try_get("disabled")?,
        account_id: row.try_get("account_id")?,
        created_at: row.try_get("created_at")?,
    })
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        let result = sqlx::query(
            r#"
            INSERT INTO users (user_name, secret_hash, account_id)
            VALUES ($1, $2, $3)
            RETURNING id, user_name, secret_hash, disabled, account_id, created_at
            "#,
        )
        .bind(&new_user.user_name)
        .bind(&new_user.secret_hash)
        .bind(&new_user.account_id)
        .fetch_one(self.pool.as_ref())
        .await;

        match result {
            Ok(row) => map_row(&row),
            Err(e) if is_unique_violation(&e) => Err(AppError::bad_request(
                "User name is already taken",
                json!({ "user_name": new_user.user_name }),
            )),
            Err(e) => Err(e.into()),
        }
    }

    async fn find_by_name(&self, user_name: &str) -> Result<Option<User>, AppError> {
        let row = sqlx::query(
            r#"
            SELECT id, user_name, secret_hash, disabled, account_id, created_at
            FROM users
            WHERE user_name = $1
            "#,
        )
        .bind(user_name)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.as_ref().map(map_row).transpose()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        let row = sqlx::query(
            r#"
            SELECT id, user_name, secret_hash, disabled, account_id, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.as_ref().map(map_row).transpose()
    }

    async fn list(&self) -> Result<Vec<User>, AppError> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_name, secret_hash, disabled, account_id, created_at
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        rows.iter().map(map_row).collect()
    }

    async fn set_disabled(&self, id: i64, disabled: bool) -> Result<bool, AppError> {
        let result = sqlx::query("UPDATE users SET disabled = $1 WHERE id = $2")
            .bind(disabled)
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
