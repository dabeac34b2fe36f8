//! Owner-scoped post endpoints.

use axum::http::StatusCode;
use serde_json::{Value, json};

use tokengate_core::types::{PageRequest, UserId};
use tokengate_database::PostStore;

use crate::helpers::TestApp;

async fn create(app: &TestApp, token: &str, title: &str) -> Value {
    let response = app
        .request(
            "POST",
            "/api/v1/posts/create",
            Some(json!({ "title": title, "body": "Body text long enough." })),
            Some(token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    response.body["data"].clone()
}

#[tokio::test]
async fn test_post_crud() {
    let app = TestApp::new();
    let token = app.signup("john@example.com", "secret1").await;

    let post = create(&app, &token, "First post").await;
    assert_eq!(post["title"], "First post");
    assert_eq!(post["user_id"], 1);
    let id = post["id"].as_i64().unwrap();

    let response = app
        .request("GET", &format!("/api/v1/posts/{id}"), None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["body"], "Body text long enough.");

    let response = app
        .request(
            "PATCH",
            &format!("/api/v1/posts/{id}/update"),
            Some(json!({ "title": "Renamed" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["title"], "Renamed");
    assert_eq!(response.body["data"]["body"], "Body text long enough.");

    let response = app
        .request("DELETE", &format!("/api/v1/posts/{id}/delete"), None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.message(), "Post deleted successfully");

    let response = app
        .request("GET", &format!("/api/v1/posts/{id}"), None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.message(), "Post not found");
}

#[tokio::test]
async fn test_posts_of_another_user_are_invisible() {
    let app = TestApp::new();
    let john = app.signup("john@example.com", "secret1").await;
    let jane = app.signup("jane@example.com", "secret1").await;

    let post = create(&app, &john, "John's post").await;
    let id = post["id"].as_i64().unwrap();
    create(&app, &jane, "Jane's post").await;

    let response = app
        .request("GET", &format!("/api/v1/posts/{id}"), None, Some(&jane))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app
        .request(
            "PATCH",
            &format!("/api/v1/posts/{id}/update"),
            Some(json!({ "title": "Hijacked" })),
            Some(&jane),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app
        .request("DELETE", &format!("/api/v1/posts/{id}/delete"), None, Some(&jane))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app.request("GET", "/api/v1/posts", None, Some(&jane)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["total_items"], 1);
    assert_eq!(response.body["data"]["items"][0]["title"], "Jane's post");

    let kept = app
        .posts
        .list_owned(UserId(1), &PageRequest::default())
        .await
        .unwrap();
    assert_eq!(kept.items[0].title, "John's post");
}

#[tokio::test]
async fn test_list_pagination() {
    let app = TestApp::new();
    let token = app.signup("john@example.com", "secret1").await;
    for i in 0..3 {
        create(&app, &token, &format!("Post {i}")).await;
    }

    let response = app
        .request("GET", "/api/v1/posts?page=1&limit=2", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let page = &response.body["data"];
    assert_eq!(page["items"].as_array().unwrap().len(), 2);
    assert_eq!(page["limit"], 2);
    assert_eq!(page["total_items"], 3);
    assert_eq!(page["has_next"], true);

    let response = app
        .request("GET", "/api/v1/posts?page=2&limit=2", None, Some(&token))
        .await;
    assert_eq!(response.body["data"]["items"][0]["title"], "Post 2");
    assert_eq!(response.body["data"]["has_next"], false);

    let response = app
        .request("GET", "/api/v1/posts?page=abc", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_invalid_input_is_rejected() {
    let app = TestApp::new();
    let token = app.signup("john@example.com", "secret1").await;

    let response = app
        .request("GET", "/api/v1/posts/not-a-number", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.message(), "Invalid post ID");

    let response = app
        .request(
            "POST",
            "/api/v1/posts/create",
            Some(json!({ "title": "Hi", "body": "short" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_post_routes_need_a_live_session() {
    let app = TestApp::new();
    let token = app.signup("john@example.com", "secret1").await;

    let response = app
        .request(
            "POST",
            "/api/v1/posts/create",
            Some(json!({ "title": "Hello", "body": "Body text long enough." })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    app.request("POST", "/api/v1/user/logout", None, Some(&token))
        .await;

    let response = app.request("GET", "/api/v1/posts", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_deleted_account_token_cannot_touch_posts() {
    let app = TestApp::new();
    let first = app.signup("john@example.com", "secret1").await;
    let second = app.login("john@example.com", "secret1").await;
    create(&app, &first, "Before deletion").await;

    let response = app
        .request("DELETE", "/api/v1/user", None, Some(&first))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app.request("GET", "/api/v1/posts", None, Some(&second)).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.message(), "User not found");

    let response = app
        .request(
            "POST",
            "/api/v1/posts/create",
            Some(json!({ "title": "After", "body": "Body text long enough." })),
            Some(&second),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
