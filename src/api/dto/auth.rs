//! DTOs for signup, login and profile endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::User;

/// Credentials for account creation.
#[derive(Debug, Deserialize)]
pub struct SignUpRequest {
    pub user_name: String,
    pub password: String,
}

/// Response for successful signup.
#[derive(Debug, Serialize)]
pub struct SignUpResponse {
    pub id: i64,
    pub account_id: String,
}

/// Credentials for token issuance.
#[derive(Debug, Deserialize)]
pub struct TokenRequest {
    pub user_name: String,
    pub password: String,
}

/// Issued bearer token.
///
/// The plaintext token appears here once; only its hash is stored.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

impl TokenResponse {
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "Bearer".to_string(),
        }
    }
}

/// Public view of a user account. The secret hash never leaves the server.
#[derive(Debug, Serialize)]
pub struct UserProfile {
    pub id: i64,
    pub user_name: String,
    pub account_id: String,
    pub disabled: bool,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            user_name: user.user_name,
            account_id: user.account_id,
            disabled: user.disabled,
            created_at: user.created_at,
        }
    }
}

/// Wrapper shape returned by the `check_me` endpoint.
#[derive(Debug, Serialize)]
pub struct CheckMeResponse {
    pub user: UserProfile,
}
