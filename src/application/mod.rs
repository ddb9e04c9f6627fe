//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls,
//! validation, and business rules. Services consume repository traits and provide
//! a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::registration_service::RegistrationService`] - Short link registration and deletion
//! - [`services::resolution_service::ResolutionService`] - Code resolution with call accounting
//! - [`services::status_service::StatusService`] - Per-code call counts
//! - [`services::auth_service::AuthService`] - Accounts and Bearer token authentication
//! - [`services::file_service::FileService`] - File upload, download, and listing
//! - [`services::health_service::HealthService`] - Storage health probes

pub mod services;
