//! In-memory repository implementations.
//!
//! These back the integration tests and mirror the PostgreSQL semantics:
//! the link map rejects duplicate codes the way the unique index does, and
//! the token store resolves owners through the user store like the SQL join.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::entities::{
    CallLogEntry, FileRecord, NewFileRecord, NewShortLink, NewUser, ShortLink, User,
};
use crate::domain::repositories::{
    AuthToken, CallLogRepository, FileRepository, HealthRepository, LinkRepository,
    TokenRepository, UserRepository,
};
use crate::error::AppError;

#[derive(Default)]
struct LinkState {
    next_id: i64,
    links: HashMap<String, ShortLink>,
}

/// In-memory implementation of [`LinkRepository`].
#[derive(Default)]
pub struct InMemoryLinkRepository {
    state: Mutex<LinkState>,
}

impl InMemoryLinkRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn create(&self, new_link: NewShortLink) -> Result<ShortLink, AppError> {
        let mut state = self.state.lock().await;

        if state.links.contains_key(&new_link.short_code) {
            return Err(AppError::creation_failed(
                "New item was not generated properly",
                json!({ "code": new_link.short_code }),
            ));
        }

        state.next_id += 1;
        let link = ShortLink {
            id: state.next_id,
            original_url: new_link.original_url,
            short_code: new_link.short_code.clone(),
            created_at: Utc::now(),
            deleted: false,
        };

        state.links.insert(new_link.short_code, link.clone());
        Ok(link)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<ShortLink>, AppError> {
        let state = self.state.lock().await;
        Ok(state.links.get(code).cloned())
    }

    async fn mark_deleted(&self, code: &str) -> Result<bool, AppError> {
        let mut state = self.state.lock().await;

        match state.links.get_mut(code) {
            Some(link) => {
                link.deleted = true;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// In-memory implementation of [`CallLogRepository`].
#[derive(Default)]
pub struct InMemoryCallLogRepository {
    entries: Mutex<Vec<CallLogEntry>>,
}

impl InMemoryCallLogRepository {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CallLogRepository for InMemoryCallLogRepository {
    async fn record(&self, short_code: &str) -> Result<(), AppError> {
        let mut entries = self.entries.lock().await;
        entries.push(CallLogEntry {
            short_code: short_code.to_string(),
            created_at: Utc::now(),
        });
        Ok(())
    }

    async fn count_by_code(&self, short_code: &str) -> Result<i64, AppError> {
        let entries = self.entries.lock().await;
        Ok(entries.iter().filter(|e| e.short_code == short_code).count() as i64)
    }
}

#[derive(Default)]
struct UserState {
    next_id: i64,
    users: Vec<User>,
}

/// In-memory implementation of [`UserRepository`].
#[derive(Default)]
pub struct InMemoryUserRepository {
    state: Mutex<UserState>,
}

impl InMemoryUserRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        let mut state = self.state.lock().await;

        if state.users.iter().any(|u| u.user_name == new_user.user_name) {
            return Err(AppError::bad_request(
                "User name is already taken",
                json!({ "user_name": new_user.user_name }),
            ));
        }

        state.next_id += 1;
        let user = User {
            id: state.next_id,
            user_name: new_user.user_name,
            secret_hash: new_user.secret_hash,
            disabled: false,
            account_id: new_user.account_id,
            created_at: Utc::now(),
        };

        state.users.push(user.clone());
        Ok(user)
    }

    async fn find_by_name(&self, user_name: &str) -> Result<Option<User>, AppError> {
        let state = self.state.lock().await;
        Ok(state.users.iter().find(|u| u.user_name == user_name).cloned())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        let state = self.state.lock().await;
        Ok(state.users.iter().find(|u| u.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<User>, AppError> {
        let state = self.state.lock().await;
        Ok(state.users.clone())
    }

    async fn set_disabled(&self, id: i64, disabled: bool) -> Result<bool, AppError> {
        let mut state = self.state.lock().await;

        match state.users.iter_mut().find(|u| u.id == id) {
            Some(user) => {
                user.disabled = disabled;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[derive(Default)]
struct TokenState {
    next_id: i64,
    tokens: Vec<AuthToken>,
}

/// In-memory implementation of [`TokenRepository`].
///
/// Holds a handle to the user repository so `find_owner` can resolve the
/// join the SQL implementation performs.
pub struct InMemoryTokenRepository {
    users: Arc<InMemoryUserRepository>,
    state: Mutex<TokenState>,
}

impl InMemoryTokenRepository {
    /// Creates an empty repository resolving owners through `users`.
    pub fn new(users: Arc<InMemoryUserRepository>) -> Self {
        Self {
            users,
            state: Mutex::new(TokenState::default()),
        }
    }
}

#[async_trait]
impl TokenRepository for InMemoryTokenRepository {
    async fn create(&self, user_id: i64, token_hash: &str) -> Result<AuthToken, AppError> {
        let mut state = self.state.lock().await;

        state.next_id += 1;
        let token = AuthToken {
            id: state.next_id,
            user_id,
            token_hash: token_hash.to_string(),
            created_at: Utc::now(),
        };

        state.tokens.push(token.clone());
        Ok(token)
    }

    async fn find_owner(&self, token_hash: &str) -> Result<Option<User>, AppError> {
        let user_id = {
            let state = self.state.lock().await;
            state
                .tokens
                .iter()
                .find(|t| t.token_hash == token_hash)
                .map(|t| t.user_id)
        };

        match user_id {
            Some(id) => self.users.find_by_id(id).await,
            None => Ok(None),
        }
    }
}

#[derive(Default)]
struct FileState {
    next_id: i64,
    files: Vec<FileRecord>,
}

/// In-memory implementation of [`FileRepository`].
#[derive(Default)]
pub struct InMemoryFileRepository {
    state: Mutex<FileState>,
}

impl InMemoryFileRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FileRepository for InMemoryFileRepository {
    async fn create(&self, new_file: NewFileRecord) -> Result<FileRecord, AppError> {
        let mut state = self.state.lock().await;

        state.next_id += 1;
        let record = FileRecord {
            id: state.next_id,
            file_id: new_file.file_id,
            file_path: new_file.file_path,
            file_name: new_file.file_name,
            size: new_file.size,
            is_downloadable: new_file.is_downloadable,
            created_at: Utc::now(),
        };

        state.files.push(record.clone());
        Ok(record)
    }

    async fn find_by_file_id(&self, file_id: &str) -> Result<Option<FileRecord>, AppError> {
        let state = self.state.lock().await;
        Ok(state.files.iter().find(|f| f.file_id == file_id).cloned())
    }

    async fn list(&self) -> Result<Vec<FileRecord>, AppError> {
        let state = self.state.lock().await;
        Ok(state.files.clone())
    }
}

/// In-memory implementation of [`HealthRepository`] that always answers.
#[derive(Default)]
pub struct InMemoryHealthRepository;

impl InMemoryHealthRepository {
    /// Creates the probe.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl HealthRepository for InMemoryHealthRepository {
    async fn ping(&self) -> Result<bool, AppError> {
        Ok(true)
    }
}
