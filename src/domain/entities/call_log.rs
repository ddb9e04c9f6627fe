//! Call log entity recording a single resolution event.

use chrono::{DateTime, Utc};

/// One resolution call against a short code.
///
/// Entries are append-only and keep the code as plain text rather than a
/// foreign key, so the history survives whatever happens to the link row.
#[derive(Debug, Clone)]
pub struct CallLogEntry {
    pub short_code: String,
    pub created_at: DateTime<Utc>,
}
