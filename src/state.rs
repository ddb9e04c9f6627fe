//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{
    AuthService, FileService, HealthService, RegistrationService, ResolutionService, StatusService,
};

/// Service handles shared across all request handlers.
///
/// Cloning is cheap; every field is an [`Arc`].
#[derive(Clone)]
pub struct AppState {
    pub registration_service: Arc<RegistrationService>,
    pub resolution_service: Arc<ResolutionService>,
    pub status_service: Arc<StatusService>,
    pub auth_service: Arc<AuthService>,
    pub file_service: Arc<FileService>,
    pub health_service: Arc<HealthService>,
}

impl AppState {
    pub fn new(
        registration_service: Arc<RegistrationService>,
        resolution_service: Arc<ResolutionService>,
        status_service: Arc<StatusService>,
        auth_service: Arc<AuthService>,
        file_service: Arc<FileService>,
        health_service: Arc<HealthService>,
    ) -> Self {
        Self {
            registration_service,
            resolution_service,
            status_service,
            auth_service,
            file_service,
            health_service,
        }
    }
}
