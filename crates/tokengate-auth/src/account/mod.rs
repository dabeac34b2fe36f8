//! Account flows built on top of the session primitives.

pub mod service;

pub use service::{AccountService, Registration};
