//! Integration tests for signup, login and logout.

use axum::http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_signup_issues_working_token() {
    let app = TestApp::new();
    let token = app.signup("john@example.com", "secret1").await;

    let response = app.request("GET", "/api/v1/session", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["email"], "john@example.com");
    assert!(response.body["data"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_signup_duplicate_email_is_conflict() {
    let app = TestApp::new();
    app.signup("john@example.com", "secret1").await;

    let response = app
        .request(
            "POST",
            "/api/v1/user/signup",
            Some(serde_json::json!({
                "first_name": "Jane",
                "last_name": "Doe",
                "age": 28,
                "email": "JOHN@example.com",
                "password": "secret2",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.message(), "Email already registered");
    assert_eq!(app.users.len().await, 1);
}

#[tokio::test]
async fn test_signup_validation() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/v1/user/signup",
            Some(serde_json::json!({
                "first_name": "J",
                "last_name": "Doe",
                "age": 200,
                "email": "john@example.com",
                "password": "secret1",
            })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "VALIDATION_ERROR");
    assert!(response.body["details"].get("first_name").is_some());
    assert!(response.body["details"].get("age").is_some());

    let response = app
        .request(
            "POST",
            "/api/v1/user/signup",
            Some(serde_json::json!({
                "first_name": "John",
                "last_name": "Doe",
                "age": 30,
                "email": "john@example.com",
                "password": "12345",
            })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(app.users.is_empty().await);
}

#[tokio::test]
async fn test_malformed_body_is_bad_request() {
    let app = TestApp::new();
    let response = app
        .request(
            "POST",
            "/api/v1/user/login",
            Some(serde_json::json!({ "email": "john@example.com" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.message(), "Invalid request body");
}

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::new();
    let first = app.signup("john@example.com", "secret1").await;
    let second = app.login("john@example.com", "secret1").await;
    assert_ne!(first, second);

    let response = app.request("GET", "/api/v1/session", None, Some(&second)).await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_login_failures_look_the_same() {
    let app = TestApp::new();
    app.signup("john@example.com", "secret1").await;

    let wrong_password = app
        .request(
            "POST",
            "/api/v1/user/login",
            Some(serde_json::json!({ "email": "john@example.com", "password": "secret2" })),
            None,
        )
        .await;
    let unknown_email = app
        .request(
            "POST",
            "/api/v1/user/login",
            Some(serde_json::json!({ "email": "nobody@example.com", "password": "secret1" })),
            None,
        )
        .await;

    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.body, unknown_email.body);
    assert_eq!(wrong_password.message(), "Invalid credentials");
}

#[tokio::test]
async fn test_protected_route_requires_token() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/v1/session", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.message(), "Unauthorized - No token provided");

    let response = app
        .request_with_headers("GET", "/api/v1/session", None, &[("Authorization", "Token abc")])
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = app
        .request("GET", "/api/v1/session", None, Some("not-a-jwt"))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.message(), "Invalid token");
}

#[tokio::test]
async fn test_logout_revokes_header_token() {
    let app = TestApp::new();
    let token = app.signup("john@example.com", "secret1").await;

    let response = app
        .request("POST", "/api/v1/user/logout", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.message(), "Successfully logged out");

    let response = app.request("GET", "/api/v1/session", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.message(), "Invalid or expired session");
}

#[tokio::test]
async fn test_logout_revokes_cookie_token_and_clears_cookie() {
    let app = TestApp::new();
    let token = app.signup("john@example.com", "secret1").await;
    let cookie = format!("session={token}");

    let response = app
        .request_with_headers("POST", "/api/v1/user/logout", None, &[("Cookie", &cookie)])
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let set_cookie = response
        .headers
        .get("set-cookie")
        .and_then(|v| v.to_str().ok())
        .expect("logout should clear the session cookie");
    assert!(set_cookie.starts_with("session="));

    let response = app.request("GET", "/api/v1/session", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_logout_is_idempotent_and_needs_no_token() {
    let app = TestApp::new();
    let token = app.signup("john@example.com", "secret1").await;

    for _ in 0..2 {
        let response = app
            .request("POST", "/api/v1/user/logout", None, Some(&token))
            .await;
        assert_eq!(response.status, StatusCode::OK);
    }

    let response = app.request("POST", "/api/v1/user/logout", None, None).await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request("POST", "/api/v1/user/logout", None, Some("garbage"))
        .await;
    assert_eq!(response.status, StatusCode::OK);
}
