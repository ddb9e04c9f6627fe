//! Repository trait for short link data access.

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing short links.
///
/// Lookups always include soft-deleted rows; callers decide what a deleted
/// link means for their operation.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::memory::InMemoryLinkRepository`] - in-memory test double
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Creates a new short link. The stored row starts with `deleted = false`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::CreationFailed`] if the short code is already
    /// taken, [`AppError::Unavailable`] if storage cannot be reached, and
    /// [`AppError::Internal`] on other database errors.
    async fn create(&self, new_link: NewShortLink) -> Result<ShortLink, AppError>;

    /// Finds a link by its short code, deleted or not.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(ShortLink))` if a row exists for the code
    /// - `Ok(None)` if the code was never registered
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] or [`AppError::Internal`] on
    /// database errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<ShortLink>, AppError>;

    /// Marks a link as deleted.
    ///
    /// The update is unconditional, so deleting an already-deleted link
    /// succeeds and leaves the flag `true`.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if a row with the code exists
    /// - `Ok(false)` if the code is unknown
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] or [`AppError::Internal`] on
    /// database errors.
    async fn mark_deleted(&self, code: &str) -> Result<bool, AppError>;
}
