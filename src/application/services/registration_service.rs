//! Short link registration and lifecycle service.

use std::sync::Arc;

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;
use serde_json::json;

/// Service for registering short links and ending their lifecycle.
///
/// Registration accepts any non-empty string as a URL; nothing is parsed or
/// normalized, and the same URL can be registered any number of times under
/// different codes. Only code collisions are handled here.
pub struct RegistrationService {
    links: Arc<dyn LinkRepository>,
}

impl RegistrationService {
    /// Creates a new registration service.
    pub fn new(links: Arc<dyn LinkRepository>) -> Self {
        Self { links }
    }

    /// Registers a single URL under a fresh short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::CreationFailed`] if no unused code could be
    /// stored, [`AppError::Unavailable`] or [`AppError::Internal`] on
    /// database errors.
    pub async fn register(&self, original_url: String) -> Result<ShortLink, AppError> {
        self.create_with_unique_code(original_url).await
    }

    /// Registers a batch of URLs in order.
    ///
    /// Each element is registered independently, exactly as [`Self::register`]
    /// would, and the result preserves input order one-to-one. The first
    /// failure aborts the rest of the batch; links created before the failure
    /// remain registered.
    ///
    /// An empty batch succeeds with an empty result.
    ///
    /// # Errors
    ///
    /// Same as [`Self::register`], for whichever element failed first.
    pub async fn register_batch(
        &self,
        original_urls: Vec<String>,
    ) -> Result<Vec<ShortLink>, AppError> {
        let mut links = Vec::with_capacity(original_urls.len());

        for original_url in original_urls {
            links.push(self.create_with_unique_code(original_url).await?);
        }

        Ok(links)
    }

    /// Soft-deletes a link by its short code.
    ///
    /// Deletion is idempotent: repeating it on an already-deleted link
    /// returns `true` again and changes nothing.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if a link with the code exists
    /// - `Ok(false)` if the code is unknown
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] or [`AppError::Internal`] on
    /// database errors.
    pub async fn delete(&self, code: &str) -> Result<bool, AppError> {
        self.links.mark_deleted(code).await
    }

    /// Generates a code, checks it is unused, and stores the link.
    ///
    /// The pre-check keeps the common path cheap; the unique index is the
    /// real guard. Losing a race surfaces as [`AppError::CreationFailed`]
    /// from `create`, which counts as a collision and moves on to the next
    /// candidate. Attempts are capped at 10.
    async fn create_with_unique_code(&self, original_url: String) -> Result<ShortLink, AppError> {
        const MAX_ATTEMPTS: usize = 10;

        for _ in 0..MAX_ATTEMPTS {
            let code = generate_code();

            if self.links.find_by_code(&code).await?.is_some() {
                continue;
            }

            let new_link = NewShortLink {
                original_url: original_url.clone(),
                short_code: code,
            };

            match self.links.create(new_link).await {
                Ok(link) => return Ok(link),
                Err(AppError::CreationFailed { .. }) => continue,
                Err(e) => return Err(e),
            }
        }

        Err(AppError::creation_failed(
            "New item was not generated properly",
            json!({ "reason": "Too many code collisions" }),
        ))
    }
}
