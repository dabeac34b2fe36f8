//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use tokengate_auth::{
    AccountService, JwtDecoder, PasswordHasher, PasswordValidator, RequestAuthenticator,
    SessionRevoker, SessionStore, TokenIssuer,
};
use tokengate_cache::CacheManager;
use tokengate_core::config::AppConfig;
use tokengate_core::result::AppResult;
use tokengate_core::traits::Clock;
use tokengate_database::{CredentialStore, PostStore};
use tokengate_service::PostService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration, read-only after startup.
    pub config: Arc<AppConfig>,
    /// Session store.
    pub sessions: SessionStore,
    /// Gate for protected routes.
    pub authenticator: Arc<RequestAuthenticator>,
    /// Signup, login, logout and account changes.
    pub accounts: Arc<AccountService>,
    /// Owner-scoped posts.
    pub posts: Arc<PostService>,
}

impl AppState {
    /// Wires the auth components over the given stores.
    pub fn new(
        config: AppConfig,
        cache: Arc<CacheManager>,
        users: Arc<dyn CredentialStore>,
        posts: Arc<dyn PostStore>,
        clock: Arc<dyn Clock>,
    ) -> AppResult<Self> {
        let auth = &config.auth;
        let sessions = SessionStore::new(cache);

        let authenticator = RequestAuthenticator::new(
            JwtDecoder::new(auth, Arc::clone(&clock)),
            sessions.clone(),
        );
        let posts = PostService::new(posts, Arc::clone(&users));
        let accounts = AccountService::new(
            users,
            PasswordHasher::new(auth)?,
            PasswordValidator::new(auth),
            TokenIssuer::new(auth, sessions.clone(), clock),
            SessionRevoker::new(sessions.clone()),
        );

        Ok(Self {
            config: Arc::new(config),
            sessions,
            authenticator: Arc::new(authenticator),
            accounts: Arc::new(accounts),
            posts: Arc::new(posts),
        })
    }
}
