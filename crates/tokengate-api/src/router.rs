//! Route definitions for the TokenGate HTTP API.
//!
//! All routes are mounted under `/api/v1`. Protected handlers take the
//! [`AuthUser`](crate::extractors::AuthUser) extractor, so a route is
//! protected exactly when its handler asks for a principal.

use axum::{
    Router,
    routing::{delete, get, patch, post},
};

use crate::handlers;
use crate::state::AppState;

/// Build the API router with all routes and state attached.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(health_routes())
        .merge(auth_routes())
        .merge(user_routes())
        .merge(post_routes());

    Router::new().nest("/api/v1", api_routes).with_state(state)
}

/// Health endpoint
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

/// Public account endpoints: signup, login, logout
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/user/signup", post(handlers::auth::signup))
        .route("/user/login", post(handlers::auth::login))
        .route("/user/logout", post(handlers::auth::logout))
}

/// Authenticated self-service endpoints
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/session", get(handlers::user::session))
        .route(
            "/user",
            patch(handlers::user::update_user).delete(handlers::user::delete_user),
        )
        .route(
            "/user/update_password",
            patch(handlers::user::update_password),
        )
}

/// Authenticated post endpoints, scoped to the caller's own posts
fn post_routes() -> Router<AppState> {
    Router::new()
        .route("/posts/create", post(handlers::post::create_post))
        .route("/posts", get(handlers::post::list_posts))
        .route("/posts/{id}", get(handlers::post::get_post))
        .route("/posts/{id}/update", patch(handlers::post::update_post))
        .route("/posts/{id}/delete", delete(handlers::post::delete_post))
}
