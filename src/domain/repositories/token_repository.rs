//! Repository trait for access token authentication.

use crate::domain::entities::User;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// An issued access token.
///
/// Tokens are stored as keyed HMAC-SHA256 hashes; the plaintext exists only
/// in the response that delivered it.
#[derive(Debug, Clone)]
pub struct AuthToken {
    pub id: i64,
    pub user_id: i64,
    pub token_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Repository interface for access token management.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgTokenRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::memory::InMemoryTokenRepository`] - in-memory test double
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Stores a new token hash for a user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] or [`AppError::Internal`] on
    /// database errors.
    async fn create(&self, user_id: i64, token_hash: &str) -> Result<AuthToken, AppError>;

    /// Resolves a token hash to its owning user.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(User))` if the hash matches an issued token
    /// - `Ok(None)` if no such token exists
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] or [`AppError::Internal`] on
    /// database errors.
    async fn find_owner(&self, token_hash: &str) -> Result<Option<User>, AppError>;
}
