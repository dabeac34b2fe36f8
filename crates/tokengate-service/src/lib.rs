//! # tokengate-service
//!
//! Business logic for resources that belong to a signed-in user. Services
//! take their stores by `Arc` at construction time and never see HTTP.

pub mod post;

pub use post::PostService;
