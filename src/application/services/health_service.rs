//! Storage health probes.

use std::sync::Arc;
use std::time::Instant;

use crate::domain::repositories::HealthRepository;
use crate::error::AppError;

/// Service for checking storage backend liveness.
pub struct HealthService {
    repository: Arc<dyn HealthRepository>,
}

impl HealthService {
    /// Creates a new health service.
    pub fn new(repository: Arc<dyn HealthRepository>) -> Self {
        Self { repository }
    }

    /// Readiness probe.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] when the backend cannot be
    /// reached.
    pub async fn ping_db(&self) -> Result<bool, AppError> {
        self.repository.ping().await
    }

    /// Timed probe reporting the round-trip in seconds.
    ///
    /// An unreachable backend yields `None` rather than an error; the
    /// caller reports it in-band.
    pub async fn probe_timed(&self) -> Option<f64> {
        let started = Instant::now();

        match self.repository.ping().await {
            Ok(_) => Some(started.elapsed().as_secs_f64()),
            Err(e) => {
                tracing::warn!(error = %e, "database probe failed");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockHealthRepository;
    use crate::error::AppError;
    use serde_json::json;

    #[tokio::test]
    async fn test_ping_db_up() {
        let mut mock_repo = MockHealthRepository::new();
        mock_repo.expect_ping().times(1).returning(|| Ok(true));

        let service = HealthService::new(Arc::new(mock_repo));

        assert!(service.ping_db().await.unwrap());
    }

    #[tokio::test]
    async fn test_ping_db_down() {
        let mut mock_repo = MockHealthRepository::new();
        mock_repo
            .expect_ping()
            .times(1)
            .returning(|| Err(AppError::unavailable("Database is unavailable", json!({}))));

        let service = HealthService::new(Arc::new(mock_repo));

        assert!(service.ping_db().await.is_err());
    }

    #[tokio::test]
    async fn test_probe_timed_reports_seconds() {
        let mut mock_repo = MockHealthRepository::new();
        mock_repo.expect_ping().times(1).returning(|| Ok(true));

        let service = HealthService::new(Arc::new(mock_repo));

        let elapsed = service.probe_timed().await.unwrap();
        assert!(elapsed >= 0.0);
    }

    #[tokio::test]
    async fn test_probe_timed_unreachable_is_none() {
        let mut mock_repo = MockHealthRepository::new();
        mock_repo
            .expect_ping()
            .times(1)
            .returning(|| Err(AppError::unavailable("Database is unavailable", json!({}))));

        let service = HealthService::new(Arc::new(mock_repo));

        assert!(service.probe_timed().await.is_none());
    }
}
