//! Business logic services for the application layer.

pub mod auth_service;
pub mod file_service;
pub mod health_service;
pub mod registration_service;
pub mod resolution_service;
pub mod status_service;

pub use auth_service::AuthService;
pub use file_service::FileService;
pub use health_service::HealthService;
pub use registration_service::RegistrationService;
pub use resolution_service::ResolutionService;
pub use status_service::StatusService;
