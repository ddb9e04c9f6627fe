//! Short link entity representing a code-to-URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL mapping.
///
/// `short_code` is unique across all rows, including soft-deleted ones.
/// `original_url` never changes after creation; `deleted` only ever moves
/// from `false` to `true`.
#[derive(Debug, Clone)]
pub struct ShortLink {
    pub id: i64,
    pub original_url: String,
    pub short_code: String,
    pub created_at: DateTime<Utc>,
    pub deleted: bool,
}

impl ShortLink {
    /// Creates a new ShortLink instance.
    pub fn new(
        id: i64,
        original_url: String,
        short_code: String,
        created_at: DateTime<Utc>,
        deleted: bool,
    ) -> Self {
        Self {
            id,
            original_url,
            short_code,
            created_at,
            deleted,
        }
    }
}

/// Input data for creating a new short link.
///
/// The id and timestamp are assigned by storage; new links always start
/// active.
#[derive(Debug, Clone)]
pub struct NewShortLink {
    pub original_url: String,
    pub short_code: String,
}
