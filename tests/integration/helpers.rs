//! Shared test helpers for integration tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use tokengate_api::{AppState, build_app};
use tokengate_cache::CacheManager;
use tokengate_cache::memory::MemoryCacheProvider;
use tokengate_core::config::AppConfig;
use tokengate_core::error::AppError;
use tokengate_core::result::AppResult;
use tokengate_core::traits::{CacheProvider, ManualClock};
use tokengate_database::{MemoryPostRepository, MemoryUserRepository};

/// Session store double that can be switched into failure modes mid-test.
#[derive(Debug, Default)]
pub struct FlakyCacheProvider {
    inner: MemoryCacheProvider,
    down: AtomicBool,
    stalled: AtomicBool,
}

impl FlakyCacheProvider {
    /// Every call errors until [`recover`](Self::recover).
    pub fn go_down(&self) {
        self.down.store(true, Ordering::SeqCst);
    }

    /// Every call hangs until [`recover`](Self::recover).
    pub fn stall(&self) {
        self.stalled.store(true, Ordering::SeqCst);
    }

    /// Back to normal.
    pub fn recover(&self) {
        self.down.store(false, Ordering::SeqCst);
        self.stalled.store(false, Ordering::SeqCst);
    }

    async fn gate(&self) -> AppResult<()> {
        if self.stalled.load(Ordering::SeqCst) {
            tokio::time::sleep(Duration::from_secs(30)).await;
        }
        if self.down.load(Ordering::SeqCst) {
            return Err(AppError::cache("connection refused"));
        }
        Ok(())
    }
}

#[async_trait]
impl CacheProvider for FlakyCacheProvider {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        self.gate().await?;
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> AppResult<()> {
        self.gate().await?;
        self.inner.set(key, value, ttl).await
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        self.gate().await?;
        self.inner.delete(key).await
    }

    async fn health_check(&self) -> AppResult<bool> {
        self.gate().await?;
        Ok(true)
    }
}

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Clock the token decoder reads
    pub clock: Arc<ManualClock>,
    /// Credential store, for direct inspection
    pub users: Arc<MemoryUserRepository>,
    /// Post store, for direct inspection
    pub posts: Arc<MemoryPostRepository>,
    /// Session store backend
    pub store: Arc<FlakyCacheProvider>,
}

impl TestApp {
    /// Create a new test application on in-memory stores.
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.auth.jwt_secret = "integration-test-secret".to_string();
        config.auth.argon2_memory_kib = 1024;
        config.auth.argon2_iterations = 1;

        let store = Arc::new(FlakyCacheProvider::default());
        let cache = Arc::new(CacheManager::from_provider(
            store.clone(),
            Duration::from_millis(200),
        ));
        let users = Arc::new(MemoryUserRepository::new());
        let posts = Arc::new(MemoryPostRepository::new());
        let clock = Arc::new(ManualClock::starting_now());

        let state = AppState::new(
            config,
            cache,
            users.clone(),
            posts.clone(),
            clock.clone(),
        )
        .expect("Failed to build app state");

        Self {
            router: build_app(state),
            clock,
            users,
            posts,
            store,
        }
    }

    /// Sign up a user and return the issued token.
    pub async fn signup(&self, email: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/v1/user/signup",
                Some(serde_json::json!({
                    "first_name": "John",
                    "last_name": "Doe",
                    "age": 30,
                    "email": email,
                    "password": password,
                })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Signup failed: {:?}",
            response.body
        );
        response.token()
    }

    /// Login and return the issued token.
    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/v1/user/login",
                Some(serde_json::json!({ "email": email, "password": password })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );
        response.token()
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let authorization = token.map(|t| format!("Bearer {t}"));
        let mut headers = Vec::new();
        if let Some(value) = authorization.as_deref() {
            headers.push(("Authorization", value));
        }
        self.request_with_headers(method, path, body, &headers).await
    }

    /// Make an HTTP request with arbitrary extra headers.
    pub async fn request_with_headers(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        headers: &[(&str, &str)],
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        for (name, value) in headers {
            req = req.header(*name, *value);
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read body")
            .to_bytes();

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// The token inside a signup or login response.
    pub fn token(&self) -> String {
        self.body["data"]["token"]
            .as_str()
            .expect("No token in response")
            .to_string()
    }

    /// The `error` code of an error response.
    pub fn error_code(&self) -> &str {
        self.body["error"].as_str().unwrap_or_default()
    }

    /// The `message` of an error or message response.
    pub fn message(&self) -> &str {
        self.body["message"]
            .as_str()
            .or_else(|| self.body["data"]["message"].as_str())
            .unwrap_or_default()
    }
}
