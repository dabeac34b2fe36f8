//! # tokengate-entity
//!
//! Domain entity models for TokenGate. Database entities derive
//! `sqlx::FromRow` in addition to the serde traits.

pub mod post;
pub mod user;
