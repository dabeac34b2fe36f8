//! Profile edits, password changes and account deletion.

use axum::http::StatusCode;

use tokengate_core::types::UserId;
use tokengate_database::CredentialStore;

use crate::helpers::TestApp;

async fn stored_hash(app: &TestApp, email: &str) -> String {
    app.users
        .find_by_email(email)
        .await
        .unwrap()
        .expect("user exists")
        .password_hash
}

#[tokio::test]
async fn test_profile_update_keeps_password() {
    let app = TestApp::new();
    let token = app.signup("john@example.com", "secret1").await;
    let hash_before = stored_hash(&app, "john@example.com").await;

    let response = app
        .request(
            "PATCH",
            "/api/v1/user",
            Some(serde_json::json!({ "first_name": "Johnny", "age": 31 })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["first_name"], "Johnny");
    assert_eq!(response.body["data"]["age"], 31);
    assert_eq!(response.body["data"]["last_name"], "Doe");

    assert_eq!(stored_hash(&app, "john@example.com").await, hash_before);
    app.login("john@example.com", "secret1").await;

    let stored = app.users.find_by_id(UserId(1)).await.unwrap().unwrap();
    assert_eq!(stored.first_name, "Johnny");
}

#[tokio::test]
async fn test_profile_update_validation() {
    let app = TestApp::new();
    let token = app.signup("john@example.com", "secret1").await;

    let response = app
        .request(
            "PATCH",
            "/api/v1/user",
            Some(serde_json::json!({ "age": 0 })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app
        .request(
            "PATCH",
            "/api/v1/user",
            Some(serde_json::json!({ "first_name": "Johnny" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_change_password() {
    let app = TestApp::new();
    let current = app.signup("john@example.com", "secret1").await;
    let other = app.login("john@example.com", "secret1").await;

    let response = app
        .request(
            "PATCH",
            "/api/v1/user/update_password",
            Some(serde_json::json!({ "current_password": "wrong1", "new_password": "secret2" })),
            Some(&current),
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = app
        .request(
            "PATCH",
            "/api/v1/user/update_password",
            Some(serde_json::json!({ "current_password": "secret1", "new_password": "secret2" })),
            Some(&current),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.message(), "Password updated successfully");

    let response = app.request("GET", "/api/v1/session", None, Some(&current)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    let response = app.request("GET", "/api/v1/session", None, Some(&other)).await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request(
            "POST",
            "/api/v1/user/login",
            Some(serde_json::json!({ "email": "john@example.com", "password": "secret1" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    app.login("john@example.com", "secret2").await;
}

#[tokio::test]
async fn test_change_password_rejects_unchanged() {
    let app = TestApp::new();
    let token = app.signup("john@example.com", "secret1").await;

    let response = app
        .request(
            "PATCH",
            "/api/v1/user/update_password",
            Some(serde_json::json!({ "current_password": "secret1", "new_password": "secret1" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app.request("GET", "/api/v1/session", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_delete_account() {
    let app = TestApp::new();
    let current = app.signup("john@example.com", "secret1").await;
    let other = app.login("john@example.com", "secret1").await;

    let response = app
        .request("DELETE", "/api/v1/user", None, Some(&current))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.message(), "User deleted successfully");
    assert!(app.users.is_empty().await);

    let response = app.request("GET", "/api/v1/session", None, Some(&current)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    // The other device still holds a live session for a user that is gone.
    let response = app.request("GET", "/api/v1/session", None, Some(&other)).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    app.signup("john@example.com", "secret1").await;
}
