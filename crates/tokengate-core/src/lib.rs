//! # tokengate-core
//!
//! Core crate for TokenGate. Contains configuration schemas, the store
//! and clock traits, typed identifiers, and the unified error system.
//!
//! This crate has **no** internal dependencies on other TokenGate crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
