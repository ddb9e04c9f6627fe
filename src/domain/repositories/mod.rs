//! Repository trait definitions for the domain layer.
//!
//! This module defines the repository interfaces (traits) that abstract data access
//! operations following the Repository pattern. These traits are implemented by
//! concrete repositories in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - PostgreSQL implementations live in `crate::infrastructure::persistence`
//! - In-memory implementations live in `crate::infrastructure::memory`
//! - Mock implementations are auto-generated via `mockall` for unit tests
//!
//! # Available Repositories
//!
//! - [`LinkRepository`] - Short link creation, lookup, and soft deletion
//! - [`CallLogRepository`] - Append-only resolution accounting
//! - [`UserRepository`] - User account management
//! - [`TokenRepository`] - Access token authentication
//! - [`FileRepository`] - Uploaded file metadata
//! - [`HealthRepository`] - Storage health probes

pub mod call_log_repository;
pub mod file_repository;
pub mod health_repository;
pub mod link_repository;
pub mod token_repository;
pub mod user_repository;

pub use call_log_repository::CallLogRepository;
pub use file_repository::FileRepository;
pub use health_repository::HealthRepository;
pub use link_repository::LinkRepository;
pub use token_repository::{AuthToken, TokenRepository};
pub use user_repository::UserRepository;

#[cfg(test)]
pub use call_log_repository::MockCallLogRepository;
#[cfg(test)]
pub use file_repository::MockFileRepository;
#[cfg(test)]
pub use health_repository::MockHealthRepository;
#[cfg(test)]
pub use link_repository::MockLinkRepository;
#[cfg(test)]
pub use token_repository::MockTokenRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
