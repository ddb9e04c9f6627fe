//! Repository trait for storage health probes.

use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for checking that the storage backend answers.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgHealthRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::memory::InMemoryHealthRepository`] - in-memory test double
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HealthRepository: Send + Sync {
    /// Runs a trivial query against the backend.
    ///
    /// # Returns
    ///
    /// `Ok(true)` when the backend answered.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] when the backend cannot be reached.
    async fn ping(&self) -> Result<bool, AppError>;
}
