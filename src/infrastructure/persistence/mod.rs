//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx prepared
//! statements over a shared connection pool.
//!
//! # Repositories
//!
//! - [`PgLinkRepository`] - Short link storage and retrieval
//! - [`PgCallLogRepository`] - Resolution accounting
//! - [`PgUserRepository`] - User accounts
//! - [`PgTokenRepository`] - Issued access tokens
//! - [`PgFileRepository`] - Uploaded file metadata
//! - [`PgHealthRepository`] - Liveness probe

pub mod pg_call_log_repository;
pub mod pg_file_repository;
pub mod pg_health_repository;
pub mod pg_link_repository;
pub mod pg_token_repository;
pub mod pg_user_repository;

pub use pg_call_log_repository::PgCallLogRepository;
pub use pg_file_repository::PgFileRepository;
pub use pg_health_repository::PgHealthRepository;
pub use pg_link_repository::PgLinkRepository;
pub use pg_token_repository::PgTokenRepository;
pub use pg_user_repository::PgUserRepository;
