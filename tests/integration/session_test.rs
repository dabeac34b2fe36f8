//! Session lifecycle: expiry, independence across devices, and behavior
//! while the session store is unreachable.

use axum::http::StatusCode;
use chrono::Duration;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_token_expires_with_clock() {
    let app = TestApp::new();
    let token = app.signup("john@example.com", "secret1").await;

    app.clock.advance(Duration::hours(23));
    let response = app.request("GET", "/api/v1/session", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);

    app.clock.advance(Duration::hours(1) + Duration::seconds(1));
    let response = app.request("GET", "/api/v1/session", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let fresh = app.login("john@example.com", "secret1").await;
    let response = app.request("GET", "/api/v1/session", None, Some(&fresh)).await;
    assert_eq!(response.status, StatusCode::OK);

    app.request("POST", "/api/v1/user/logout", None, Some(&fresh))
        .await;
    let response = app.request("GET", "/api/v1/session", None, Some(&fresh)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_devices_are_independent() {
    let app = TestApp::new();
    let laptop = app.signup("john@example.com", "secret1").await;
    let phone = app.login("john@example.com", "secret1").await;

    app.request("POST", "/api/v1/user/logout", None, Some(&laptop))
        .await;

    let response = app.request("GET", "/api/v1/session", None, Some(&laptop)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    let response = app.request("GET", "/api/v1/session", None, Some(&phone)).await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_tokens_do_not_cross_accounts() {
    let app = TestApp::new();
    let john = app.signup("john@example.com", "secret1").await;
    let jane = app.signup("jane@example.com", "secret1").await;

    let response = app.request("GET", "/api/v1/session", None, Some(&john)).await;
    assert_eq!(response.body["data"]["email"], "john@example.com");
    let response = app.request("GET", "/api/v1/session", None, Some(&jane)).await;
    assert_eq!(response.body["data"]["email"], "jane@example.com");
}

#[tokio::test]
async fn test_store_outage_fails_closed() {
    let app = TestApp::new();
    let token = app.signup("john@example.com", "secret1").await;

    app.store.go_down();

    let response = app.request("GET", "/api/v1/session", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(response.error_code(), "SERVICE_UNAVAILABLE");

    let response = app
        .request(
            "POST",
            "/api/v1/user/login",
            Some(serde_json::json!({ "email": "john@example.com", "password": "secret1" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(response.body["data"]["token"].is_null());

    // Signup keeps the account but hands out no token.
    let response = app
        .request(
            "POST",
            "/api/v1/user/signup",
            Some(serde_json::json!({
                "first_name": "Jane",
                "last_name": "Doe",
                "age": 28,
                "email": "jane@example.com",
                "password": "secret1",
            })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(response.body["data"]["token"].is_null());
    assert_eq!(app.users.len().await, 2);

    // Logout stays best-effort; the entry survives the failed delete.
    let response = app
        .request("POST", "/api/v1/user/logout", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    app.store.recover();
    let response = app.request("GET", "/api/v1/session", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);

    let jane = app.login("jane@example.com", "secret1").await;
    let response = app.request("GET", "/api/v1/session", None, Some(&jane)).await;
    assert_eq!(response.body["data"]["email"], "jane@example.com");
}

#[tokio::test]
async fn test_stalled_store_times_out() {
    let app = TestApp::new();
    let token = app.signup("john@example.com", "secret1").await;

    app.store.stall();
    let response = app.request("GET", "/api/v1/session", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);

    app.store.recover();
    let response = app.request("GET", "/api/v1/session", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_health_reports_store_state() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/v1/health", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "ok");

    app.store.go_down();
    let response = app.request("GET", "/api/v1/health", None, None).await;
    assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(response.body["data"]["session_store"], "unavailable");
}
