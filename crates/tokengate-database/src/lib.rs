//! # tokengate-database
//!
//! Persistent stores for TokenGate: PostgreSQL connection management,
//! migrations, and the [`CredentialStore`] and [`PostStore`]
//! implementations (PostgreSQL and in-memory).

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::{DatabasePool, Stores, open_stores};
pub use repositories::{
    CredentialStore, MemoryPostRepository, MemoryUserRepository, PostRepository, PostStore,
    UserRepository,
};
