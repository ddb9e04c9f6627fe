mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;
use urlcut::domain::repositories::UserRepository;
use urlcut::routes::app_router;
use uuid::Uuid;

#[tokio::test]
async fn test_sign_up_creates_account() {
    let app = common::create_test_app();
    let server = common::test_server(&app);

    let response = server
        .post("/sign_up")
        .json(&json!({ "user_name": "alice", "password": "s3cret" }))
        .await;

    assert_eq!(response.status_code(), 201);
    let body: Value = response.json();
    assert!(body["id"].as_i64().unwrap() >= 1);
    assert!(Uuid::parse_str(body["account_id"].as_str().unwrap()).is_ok());
}

#[tokio::test]
async fn test_sign_up_duplicate_name_rejected() {
    let app = common::create_test_app();
    let server = common::test_server(&app);

    let payload = json!({ "user_name": "alice", "password": "s3cret" });

    let response = server.post("/sign_up").json(&payload).await;
    assert_eq!(response.status_code(), 201);

    let response = server.post("/sign_up").json(&payload).await;
    assert_eq!(response.status_code(), 400);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_sign_up_rejects_short_password() {
    let app = common::create_test_app();
    let server = common::test_server(&app);

    let response = server
        .post("/sign_up")
        .json(&json!({ "user_name": "alice", "password": "abc" }))
        .await;

    assert_eq!(response.status_code(), 400);
}

#[tokio::test]
async fn test_sign_up_rejects_short_name() {
    let app = common::create_test_app();
    let server = common::test_server(&app);

    let response = server
        .post("/sign_up")
        .json(&json!({ "user_name": "abc", "password": "s3cret" }))
        .await;

    assert_eq!(response.status_code(), 400);
}

#[tokio::test]
async fn test_token_issues_bearer_token() {
    let app = common::create_test_app();
    let server = common::test_server(&app);

    server
        .post("/sign_up")
        .json(&json!({ "user_name": "alice", "password": "s3cret" }))
        .await;

    let response = server
        .post("/token")
        .json(&json!({ "user_name": "alice", "password": "s3cret" }))
        .await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body["token_type"], "Bearer");

    let token = body["access_token"].as_str().unwrap();
    assert_eq!(token.len(), 48);
    assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
}

#[tokio::test]
async fn test_token_wrong_password_unauthorized() {
    let app = common::create_test_app();
    let server = common::test_server(&app);

    server
        .post("/sign_up")
        .json(&json!({ "user_name": "alice", "password": "s3cret" }))
        .await;

    let response = server
        .post("/token")
        .json(&json!({ "user_name": "alice", "password": "wrong-password" }))
        .await;

    assert_eq!(response.status_code(), 401);
    assert_eq!(response.header("www-authenticate"), "Bearer");
}

#[tokio::test]
async fn test_token_unknown_user_unauthorized() {
    let app = common::create_test_app();
    let server = common::test_server(&app);

    let response = server
        .post("/token")
        .json(&json!({ "user_name": "nobody", "password": "s3cret" }))
        .await;

    assert_eq!(response.status_code(), 401);
}

#[tokio::test]
async fn test_users_me_returns_profile() {
    let app = common::create_test_app();
    let server = common::test_server(&app);

    let token = common::sign_up_and_login(&server, "alice", "s3cret").await;

    let response = server
        .get("/users/me")
        .add_header("Authorization", format!("Bearer {token}"))
        .await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body["user_name"], "alice");
    assert_eq!(body["disabled"], false);
    assert!(body.get("secret_hash").is_none());
}

#[tokio::test]
async fn test_check_me_wraps_profile() {
    let app = common::create_test_app();
    let server = common::test_server(&app);

    let token = common::sign_up_and_login(&server, "alice", "s3cret").await;

    let response = server
        .get("/check_me")
        .add_header("Authorization", format!("Bearer {token}"))
        .await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body["user"]["user_name"], "alice");
}

#[tokio::test]
async fn test_users_me_requires_token() {
    let app = common::create_test_app();
    let server = common::test_server(&app);

    let response = server.get("/users/me").await;

    assert_eq!(response.status_code(), 401);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "unauthorized");
}

#[tokio::test]
async fn test_users_me_rejects_garbage_token() {
    let app = common::create_test_app();
    let server = common::test_server(&app);

    let response = server
        .get("/users/me")
        .add_header("Authorization", "Bearer not-a-real-token")
        .await;

    assert_eq!(response.status_code(), 401);
    assert_eq!(response.header("www-authenticate"), "Bearer");
}

#[tokio::test]
async fn test_disabled_user_token_rejected() {
    let app = common::create_test_app();
    let server = common::test_server(&app);

    let response = server
        .post("/sign_up")
        .json(&json!({ "user_name": "alice", "password": "s3cret" }))
        .await;
    let body: Value = response.json();
    let user_id = body["id"].as_i64().unwrap();

    let response = server
        .post("/token")
        .json(&json!({ "user_name": "alice", "password": "s3cret" }))
        .await;
    let body: Value = response.json();
    let token = body["access_token"].as_str().unwrap().to_string();

    app.users.set_disabled(user_id, true).await.unwrap();

    let response = server
        .get("/users/me")
        .add_header("Authorization", format!("Bearer {token}"))
        .await;

    assert_eq!(response.status_code(), 401);
}

/// The original clients call `/sign_up/` with a trailing slash; the
/// production router trims it.
#[tokio::test]
async fn test_trailing_slash_normalized() {
    let app = common::create_test_app();
    let router = app_router(app.state.clone());

    let request = Request::builder()
        .method("POST")
        .uri("/sign_up/")
        .header("content-type", "application/json")
        .body(Body::from(
            r#"{"user_name":"alice","password":"s3cret"}"#,
        ))
        .unwrap();

    let response = router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
}
