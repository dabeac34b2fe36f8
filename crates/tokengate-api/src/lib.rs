//! # tokengate-api
//!
//! HTTP API layer for TokenGate built on Axum.
//!
//! Provides the account endpoints, the `AuthUser` extractor that runs the
//! request authenticator, middleware (CORS, request logging), DTOs, and
//! error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::build_app;
pub use error::ApiError;
pub use state::AppState;
