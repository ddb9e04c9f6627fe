mod common;

use serde_json::Value;

#[tokio::test]
async fn test_resolve_returns_original_url() {
    let app = common::create_test_app();
    let server = common::test_server(&app);

    common::create_test_link(&app, "1234567", "https://example.com/target").await;

    let response = server.get("/1234567").await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body["url"], "https://example.com/target");
}

#[tokio::test]
async fn test_resolve_unknown_code_not_found() {
    let app = common::create_test_app();
    let server = common::test_server(&app);

    let response = server.get("/0000000").await;

    response.assert_status_not_found();
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_resolve_unknown_code_logs_nothing() {
    let app = common::create_test_app();
    let server = common::test_server(&app);

    server.get("/0000000").await;

    assert_eq!(common::call_count(&app, "0000000").await, 0);
}

#[tokio::test]
async fn test_resolve_deleted_code_gone() {
    let app = common::create_test_app();
    let server = common::test_server(&app);

    common::create_deleted_link(&app, "1234567", "https://example.com").await;

    let response = server.get("/1234567").await;

    assert_eq!(response.status_code(), 410);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "gone");
}

#[tokio::test]
async fn test_resolve_deleted_code_still_counts() {
    let app = common::create_test_app();
    let server = common::test_server(&app);

    common::create_deleted_link(&app, "1234567", "https://example.com").await;

    server.get("/1234567").await;
    server.get("/1234567").await;

    assert_eq!(common::call_count(&app, "1234567").await, 2);
}

#[tokio::test]
async fn test_resolve_increments_count_each_call() {
    let app = common::create_test_app();
    let server = common::test_server(&app);

    common::create_test_link(&app, "1234567", "https://example.com").await;

    for _ in 0..3 {
        let response = server.get("/1234567").await;
        assert_eq!(response.status_code(), 200);
    }

    assert_eq!(common::call_count(&app, "1234567").await, 3);
}
