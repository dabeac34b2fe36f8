//! Owner-scoped post operations.

pub mod service;

pub use service::PostService;
