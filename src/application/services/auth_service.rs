//! User registration, login, and token authentication.

use hmac::{Hmac, Mac};
use rand::Rng;
use sha2::Sha256;
use std::sync::Arc;

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::{TokenRepository, UserRepository};
use crate::error::AppError;
use serde_json::json;
use uuid::Uuid;

type HmacSha256 = Hmac<Sha256>;

/// Characters used in generated access tokens.
const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Length of generated access tokens.
const TOKEN_LEN: usize = 48;

/// Minimum and maximum user name length.
const USER_NAME_LEN: std::ops::RangeInclusive<usize> = 4..=64;

/// Minimum password length.
const MIN_PASSWORD_LEN: usize = 4;

/// Service for user accounts and Bearer token authentication.
///
/// Passwords and tokens are both hashed with HMAC-SHA256 (keyed by
/// `signing_secret`) before storage and comparison. An attacker with
/// read-only access to the database cannot verify or forge credentials
/// without the server-side secret.
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    tokens: Arc<dyn TokenRepository>,
    signing_secret: String,
}

impl AuthService {
    /// Creates the service. `signing_secret` must match the value
    /// existing credentials were hashed with, or nothing stored will
    /// verify.
    pub fn new(
        users: Arc<dyn UserRepository>,
        tokens: Arc<dyn TokenRepository>,
        signing_secret: String,
    ) -> Self {
        Self {
            users,
            tokens,
            signing_secret,
        }
    }

    /// Hashes a secret with HMAC-SHA256 using the server signing secret.
    ///
    /// Returns a 64-character lowercase hex-encoded MAC. Used for both
    /// passwords and access tokens.
    pub fn hash_secret(&self, secret: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(self.signing_secret.as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(secret.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    /// Validates sign-up input.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the user name is not 4-64
    /// characters or the password is shorter than 4 characters.
    pub fn validate_signup(user_name: &str, password: &str) -> Result<(), AppError> {
        if !USER_NAME_LEN.contains(&user_name.chars().count()) {
            return Err(AppError::bad_request(
                "User name must be 4-64 characters",
                json!({ "provided_length": user_name.chars().count() }),
            ));
        }

        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AppError::bad_request(
                "Password must be at least 4 characters",
                json!({ "min_length": MIN_PASSWORD_LEN }),
            ));
        }

        Ok(())
    }

    /// Registers a new user account.
    ///
    /// The password is hashed before it reaches storage and a fresh UUID v4
    /// becomes the public `account_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the input is invalid or the name
    /// is taken, [`AppError::Unavailable`] or [`AppError::Internal`] on
    /// database errors.
    pub async fn sign_up(&self, user_name: String, password: String) -> Result<User, AppError> {
        Self::validate_signup(&user_name, &password)?;

        let new_user = NewUser {
            user_name,
            secret_hash: self.hash_secret(&password),
            account_id: Uuid::new_v4().to_string(),
        };

        self.users.create(new_user).await
    }

    /// Verifies credentials and issues a fresh access token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the user is unknown, the
    /// password does not match, or the account is disabled. Unknown user
    /// and wrong password are indistinguishable to the caller.
    pub async fn login(&self, user_name: &str, password: &str) -> Result<String, AppError> {
        let user = self
            .users
            .find_by_name(user_name)
            .await?
            .ok_or_else(|| AppError::unauthorized("Incorrect username or password", json!({})))?;

        if self.hash_secret(password) != user.secret_hash {
            return Err(AppError::unauthorized(
                "Incorrect username or password",
                json!({}),
            ));
        }

        if user.disabled {
            return Err(AppError::unauthorized(
                "User is disabled",
                json!({ "user_name": user.user_name }),
            ));
        }

        self.mint_token(user.id).await
    }

    /// Issues a new access token for a user and returns the plaintext.
    ///
    /// Only the HMAC of the token is stored; the returned plaintext is the
    /// single copy that will ever exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] or [`AppError::Internal`] on
    /// database errors.
    pub async fn mint_token(&self, user_id: i64) -> Result<String, AppError> {
        let token = generate_token();
        self.tokens
            .create(user_id, &self.hash_secret(&token))
            .await?;
        Ok(token)
    }

    /// Authenticates a raw Bearer token and returns its owner.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token matches no issued
    /// credential or its owner has been disabled.
    pub async fn authenticate(&self, token: &str) -> Result<User, AppError> {
        let token_hash = self.hash_secret(token);

        let user = self.tokens.find_owner(&token_hash).await?.ok_or_else(|| {
            AppError::unauthorized("Unauthorized", json!({ "reason": "Invalid token" }))
        })?;

        if user.disabled {
            return Err(AppError::unauthorized(
                "User is disabled",
                json!({ "user_name": user.user_name }),
            ));
        }

        Ok(user)
    }
}

/// Generates a random alphanumeric access token.
pub fn generate_token() -> String {
    let mut rng = rand::rng();

    (0..TOKEN_LEN)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::{AuthToken, MockTokenRepository, MockUserRepository};
    use chrono::Utc;

    const SECRET: &str = "unit-test-secret";

    fn hmac_hex(secret: &str) -> String {
        let mut mac =
            HmacSha256::new_from_slice(SECRET.as_bytes()).expect("HMAC accepts any key length");
        mac.update(secret.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    fn test_user(id: i64, user_name: &str, password: &str, disabled: bool) -> User {
        User {
            id,
            user_name: user_name.to_string(),
            secret_hash: hmac_hex(password),
            disabled,
            account_id: Uuid::new_v4().to_string(),
            created_at: Utc::now(),
        }
    }

    fn service(users: MockUserRepository, tokens: MockTokenRepository) -> AuthService {
        AuthService::new(Arc::new(users), Arc::new(tokens), SECRET.to_string())
    }

    #[test]
    fn test_validate_signup_bounds() {
        assert!(AuthService::validate_signup("abcd", "pass").is_ok());
        assert!(AuthService::validate_signup(&"x".repeat(64), "pass").is_ok());

        assert!(AuthService::validate_signup("abc", "pass").is_err());
        assert!(AuthService::validate_signup(&"x".repeat(65), "pass").is_err());
        assert!(AuthService::validate_signup("abcd", "pas").is_err());
    }

    #[test]
    fn test_generate_token_shape() {
        let token = generate_token();
        assert_eq!(token.len(), TOKEN_LEN);
        assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_ne!(token, generate_token());
    }

    #[tokio::test]
    async fn test_sign_up_hashes_password() {
        let mut mock_users = MockUserRepository::new();
        let mock_tokens = MockTokenRepository::new();

        let expected_hash = hmac_hex("hunter22");
        mock_users
            .expect_create()
            .withf(move |new_user| {
                new_user.user_name == "alice"
                    && new_user.secret_hash == expected_hash
                    && Uuid::parse_str(&new_user.account_id).is_ok()
            })
            .times(1)
            .returning(|new_user| {
                Ok(User {
                    id: 1,
                    user_name: new_user.user_name,
                    secret_hash: new_user.secret_hash,
                    disabled: false,
                    account_id: new_user.account_id,
                    created_at: Utc::now(),
                })
            });

        let service = service(mock_users, mock_tokens);

        let user = service
            .sign_up("alice".to_string(), "hunter22".to_string())
            .await
            .unwrap();

        assert_eq!(user.user_name, "alice");
        assert!(!user.disabled);
    }

    #[tokio::test]
    async fn test_sign_up_rejects_invalid_input() {
        let mut mock_users = MockUserRepository::new();
        let mock_tokens = MockTokenRepository::new();

        mock_users.expect_create().times(0);

        let service = service(mock_users, mock_tokens);

        let result = service
            .sign_up("ab".to_string(), "hunter22".to_string())
            .await;
        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));

        let result = service.sign_up("alice".to_string(), "ab".to_string()).await;
        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_login_success_issues_token() {
        let mut mock_users = MockUserRepository::new();
        let mut mock_tokens = MockTokenRepository::new();

        mock_users
            .expect_find_by_name()
            .withf(|name| name == "alice")
            .times(1)
            .returning(|_| Ok(Some(test_user(1, "alice", "hunter22", false))));

        mock_tokens
            .expect_create()
            .withf(|user_id, token_hash| *user_id == 1 && token_hash.len() == 64)
            .times(1)
            .returning(|user_id, token_hash| {
                Ok(AuthToken {
                    id: 1,
                    user_id,
                    token_hash: token_hash.to_string(),
                    created_at: Utc::now(),
                })
            });

        let service = service(mock_users, mock_tokens);

        let token = service.login("alice", "hunter22").await.unwrap();
        assert_eq!(token.len(), TOKEN_LEN);
        assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let mut mock_users = MockUserRepository::new();
        let mut mock_tokens = MockTokenRepository::new();

        mock_users
            .expect_find_by_name()
            .times(1)
            .returning(|_| Ok(Some(test_user(1, "alice", "hunter22", false))));

        mock_tokens.expect_create().times(0);

        let service = service(mock_users, mock_tokens);

        let result = service.login("alice", "wrong-password").await;
        assert!(matches!(result.unwrap_err(), AppError::Unauthorized { .. }));
    }

    #[tokio::test]
    async fn test_login_unknown_user() {
        let mut mock_users = MockUserRepository::new();
        let mock_tokens = MockTokenRepository::new();

        mock_users
            .expect_find_by_name()
            .times(1)
            .returning(|_| Ok(None));

        let service = service(mock_users, mock_tokens);

        let result = service.login("nobody", "hunter22").await;
        assert!(matches!(result.unwrap_err(), AppError::Unauthorized { .. }));
    }

    #[tokio::test]
    async fn test_login_disabled_user() {
        let mut mock_users = MockUserRepository::new();
        let mut mock_tokens = MockTokenRepository::new();

        mock_users
            .expect_find_by_name()
            .times(1)
            .returning(|_| Ok(Some(test_user(1, "alice", "hunter22", true))));

        mock_tokens.expect_create().times(0);

        let service = service(mock_users, mock_tokens);

        let result = service.login("alice", "hunter22").await;
        assert!(matches!(result.unwrap_err(), AppError::Unauthorized { .. }));
    }

    #[tokio::test]
    async fn test_authenticate_returns_owner() {
        let mock_users = MockUserRepository::new();
        let mut mock_tokens = MockTokenRepository::new();

        let token = "issued-token";
        let expected_hash = hmac_hex(token);

        mock_tokens
            .expect_find_owner()
            .withf(move |hash| hash == expected_hash)
            .times(1)
            .returning(|_| Ok(Some(test_user(1, "alice", "hunter22", false))));

        let service = service(mock_users, mock_tokens);

        let user = service.authenticate(token).await.unwrap();
        assert_eq!(user.user_name, "alice");
    }

    #[tokio::test]
    async fn test_authenticate_unknown_token() {
        let mock_users = MockUserRepository::new();
        let mut mock_tokens = MockTokenRepository::new();

        mock_tokens
            .expect_find_owner()
            .times(1)
            .returning(|_| Ok(None));

        let service = service(mock_users, mock_tokens);

        let result = service.authenticate("never-issued").await;
        assert!(matches!(result.unwrap_err(), AppError::Unauthorized { .. }));
    }

    #[tokio::test]
    async fn test_authenticate_disabled_owner() {
        let mock_users = MockUserRepository::new();
        let mut mock_tokens = MockTokenRepository::new();

        mock_tokens
            .expect_find_owner()
            .times(1)
            .returning(|_| Ok(Some(test_user(1, "alice", "hunter22", true))));

        let service = service(mock_users, mock_tokens);

        let result = service.authenticate("some-token").await;
        assert!(matches!(result.unwrap_err(), AppError::Unauthorized { .. }));
    }

    #[tokio::test]
    async fn test_hash_secret_is_deterministic() {
        let service = service(MockUserRepository::new(), MockTokenRepository::new());

        let first = service.hash_secret("some-credential");
        let second = service.hash_secret("some-credential");

        assert_eq!(first, second);
        assert_eq!(first.len(), 64);
    }

    #[tokio::test]
    async fn test_hash_secret_secret_matters() {
        let svc1 = AuthService::new(
            Arc::new(MockUserRepository::new()),
            Arc::new(MockTokenRepository::new()),
            "secret-a".to_string(),
        );
        let svc2 = AuthService::new(
            Arc::new(MockUserRepository::new()),
            Arc::new(MockTokenRepository::new()),
            "secret-b".to_string(),
        );

        assert_ne!(svc1.hash_secret("token"), svc2.hash_secret("token"));
    }
}
