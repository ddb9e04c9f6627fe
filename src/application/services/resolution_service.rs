//! Short link resolution with call accounting.

use std::sync::Arc;

use crate::domain::repositories::{CallLogRepository, LinkRepository};
use crate::error::AppError;
use serde_json::json;

/// Service for resolving short codes back to their original URLs.
///
/// Every resolution of an existing code appends exactly one call log entry,
/// whether or not the link is deleted. Log first, then check the deleted
/// flag: a deleted link keeps accumulating history while answering 410.
pub struct ResolutionService {
    links: Arc<dyn LinkRepository>,
    call_log: Arc<dyn CallLogRepository>,
}

impl ResolutionService {
    /// Creates a new resolution service.
    pub fn new(links: Arc<dyn LinkRepository>, call_log: Arc<dyn CallLogRepository>) -> Self {
        Self { links, call_log }
    }

    /// Resolves a short code to its original URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code was never registered
    /// (nothing is logged), [`AppError::Gone`] if the link is soft-deleted
    /// (the call is still logged), and [`AppError::Unavailable`] or
    /// [`AppError::Internal`] on database errors.
    pub async fn resolve(&self, code: &str) -> Result<String, AppError> {
        let link = self
            .links
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "code": code })))?;

        self.call_log.record(code).await?;

        if link.deleted {
            return Err(AppError::gone(
                "Short link was deleted",
                json!({ "code": code }),
            ));
        }

        Ok(link.original_url)
    }
}
