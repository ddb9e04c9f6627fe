#![allow(dead_code)]

use axum_test::TestServer;
use std::sync::Arc;
use urlcut::application::services::{
    AuthService, FileService, HealthService, RegistrationService, ResolutionService, StatusService,
};
use urlcut::domain::entities::NewShortLink;
use urlcut::domain::repositories::{CallLogRepository, LinkRepository};
use urlcut::infrastructure::memory::{
    InMemoryCallLogRepository, InMemoryFileRepository, InMemoryHealthRepository,
    InMemoryLinkRepository, InMemoryObjectStore, InMemoryTokenRepository, InMemoryUserRepository,
};
use urlcut::routes::router;
use urlcut::state::AppState;

pub const TEST_SIGNING_SECRET: &str = "test-signing-secret";

/// Application state over in-memory repositories, with direct handles to
/// the stores for seeding and inspection.
pub struct TestApp {
    pub state: AppState,
    pub links: Arc<InMemoryLinkRepository>,
    pub call_log: Arc<InMemoryCallLogRepository>,
    pub users: Arc<InMemoryUserRepository>,
    pub files: Arc<InMemoryFileRepository>,
    pub store: Arc<InMemoryObjectStore>,
}

pub fn create_test_app() -> TestApp {
    let links = Arc::new(InMemoryLinkRepository::new());
    let call_log = Arc::new(InMemoryCallLogRepository::new());
    let users = Arc::new(InMemoryUserRepository::new());
    let tokens = Arc::new(InMemoryTokenRepository::new(users.clone()));
    let files = Arc::new(InMemoryFileRepository::new());
    let store = Arc::new(InMemoryObjectStore::new());

    let state = AppState::new(
        Arc::new(RegistrationService::new(links.clone())),
        Arc::new(ResolutionService::new(links.clone(), call_log.clone())),
        Arc::new(StatusService::new(links.clone(), call_log.clone())),
        Arc::new(AuthService::new(
            users.clone(),
            tokens,
            TEST_SIGNING_SECRET.to_string(),
        )),
        Arc::new(FileService::new(files.clone(), store.clone())),
        Arc::new(HealthService::new(Arc::new(InMemoryHealthRepository::new()))),
    );

    TestApp {
        state,
        links,
        call_log,
        users,
        files,
        store,
    }
}

pub fn test_server(app: &TestApp) -> TestServer {
    TestServer::new(router(app.state.clone())).unwrap()
}

pub async fn create_test_link(app: &TestApp, code: &str, url: &str) {
    app.links
        .create(NewShortLink {
            original_url: url.to_string(),
            short_code: code.to_string(),
        })
        .await
        .unwrap();
}

pub async fn create_deleted_link(app: &TestApp, code: &str, url: &str) {
    create_test_link(app, code, url).await;
    app.links.mark_deleted(code).await.unwrap();
}

pub async fn call_count(app: &TestApp, code: &str) -> i64 {
    app.call_log.count_by_code(code).await.unwrap()
}

/// Creates an account over HTTP and returns a bearer token for it.
pub async fn sign_up_and_login(server: &TestServer, user_name: &str, password: &str) -> String {
    let response = server
        .post("/sign_up")
        .json(&serde_json::json!({ "user_name": user_name, "password": password }))
        .await;
    assert_eq!(response.status_code(), 201);

    let response = server
        .post("/token")
        .json(&serde_json::json!({ "user_name": user_name, "password": password }))
        .await;
    assert_eq!(response.status_code(), 200);

    let body: serde_json::Value = response.json();
    body["access_token"].as_str().unwrap().to_string()
}
