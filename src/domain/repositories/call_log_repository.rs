//! Repository trait for the resolution call log.

use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the append-only call log.
///
/// The log keeps one row per resolution attempt against an existing code.
/// `short_code` is stored as plain text, not a foreign key, so entries
/// survive link deletion.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCallLogRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::memory::InMemoryCallLogRepository`] - in-memory test double
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CallLogRepository: Send + Sync {
    /// Appends one log entry for the given code, timestamped now.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] or [`AppError::Internal`] on
    /// database errors.
    async fn record(&self, short_code: &str) -> Result<(), AppError>;

    /// Counts log entries for the given code. Unknown codes count as zero.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] or [`AppError::Internal`] on
    /// database errors.
    async fn count_by_code(&self, short_code: &str) -> Result<i64, AppError>;
}
