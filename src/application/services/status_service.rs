//! Per-code call count reporting.

use std::sync::Arc;

use crate::domain::repositories::{CallLogRepository, LinkRepository};
use crate::error::AppError;
use serde_json::json;

/// Service for reporting how many times a short code has been resolved.
///
/// Existence and count are separate questions: a registered code that was
/// never called reports zero, only a code that was never registered is an
/// error. Deleted links keep reporting their full history.
pub struct StatusService {
    links: Arc<dyn LinkRepository>,
    call_log: Arc<dyn CallLogRepository>,
}

impl StatusService {
    /// Creates a new status service.
    pub fn new(links: Arc<dyn LinkRepository>, call_log: Arc<dyn CallLogRepository>) -> Self {
        Self { links, call_log }
    }

    /// Returns the number of logged calls for a short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code was never registered,
    /// [`AppError::Unavailable`] or [`AppError::Internal`] on database
    /// errors.
    pub async fn call_count(&self, code: &str) -> Result<i64, AppError> {
        if self.links.find_by_code(code).await?.is_none() {
            return Err(AppError::not_found(
                "Short link not found",
                json!({ "code": code }),
            ));
        }

        self.call_log.count_by_code(code).await
    }
}
