//! User entity for API authentication.

use chrono::{DateTime, Utc};

/// A registered user account.
///
/// `secret_hash` is the HMAC of the password, never the plaintext.
/// Disabled users keep their rows and tokens but fail authentication.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub user_name: String,
    pub secret_hash: String,
    pub disabled: bool,
    /// Opaque external identifier (UUID v4), safe to expose to clients.
    pub account_id: String,
    pub created_at: DateTime<Utc>,
}

/// Input data for registering a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub user_name: String,
    pub secret_hash: String,
    pub account_id: String,
}
