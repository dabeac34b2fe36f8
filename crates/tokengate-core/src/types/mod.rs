//! Core type definitions used across the TokenGate workspace.

pub mod id;
pub mod pagination;

pub use id::{PostId, UserId};
pub use pagination::{PageRequest, PageResponse};
