//! Store bootstrap: PostgreSQL pool or in-memory fallback.

use std::sync::Arc;
use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::{info, warn};

use tokengate_core::config::{DatabaseConfig, mask_url_password};
use tokengate_core::error::{AppError, ErrorKind};

use crate::migration::run_migrations;
use crate::repositories::{
    CredentialStore, MemoryPostRepository, MemoryUserRepository, PostRepository, PostStore,
    UserRepository,
};

/// Wrapper around the sqlx PostgreSQL connection pool.
#[derive(Debug, Clone)]
pub struct DatabasePool {
    pool: PgPool,
}

impl DatabasePool {
    /// Open a pool from configuration.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, AppError> {
        info!(
            url = %mask_url_password(&config.url),
            max_connections = config.max_connections,
            "Connecting to PostgreSQL"
        );

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .idle_timeout(Duration::from_secs(config.idle_timeout_seconds))
            .connect(&config.url)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    format!("Failed to connect to database: {e}"),
                    e,
                )
            })?;

        Ok(Self { pool })
    }

    /// Return a reference to the underlying sqlx pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// The persistent stores the application runs on.
#[derive(Debug, Clone)]
pub struct Stores {
    /// Users and their password hashes.
    pub users: Arc<dyn CredentialStore>,
    /// Posts, scoped to their owners.
    pub posts: Arc<dyn PostStore>,
}

/// Build the configured stores.
///
/// `memory://` selects the in-process stores (nothing survives a restart);
/// anything else is treated as a PostgreSQL URL, connected to and migrated.
pub async fn open_stores(config: &DatabaseConfig) -> Result<Stores, AppError> {
    if config.is_memory() {
        warn!("Using in-memory stores; users and posts are lost on restart");
        return Ok(Stores {
            users: Arc::new(MemoryUserRepository::new()),
            posts: Arc::new(MemoryPostRepository::new()),
        });
    }

    let db = DatabasePool::connect(config).await?;
    run_migrations(db.pool()).await?;
    Ok(Stores {
        users: Arc::new(UserRepository::new(db.pool().clone())),
        posts: Arc::new(PostRepository::new(db.pool().clone())),
    })
}
