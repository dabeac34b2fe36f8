//! Session store facade over the cache backend.

use std::sync::Arc;
use std::time::Duration;

use sha2::{Digest, Sha256};

use tokengate_cache::CacheManager;
use tokengate_cache::keys;
use tokengate_core::error::{AppError, ErrorKind};
use tokengate_core::result::AppResult;
use tokengate_core::traits::CacheProvider;
use tokengate_core::types::UserId;

/// Live-session registry: one entry per issued token, valued by its owner.
#[derive(Debug, Clone)]
pub struct SessionStore {
    cache: Arc<CacheManager>,
}

impl SessionStore {
    /// Creates a session store over the given cache.
    pub fn new(cache: Arc<CacheManager>) -> Self {
        Self { cache }
    }

    /// Records `token` as live for `user_id` for `ttl`.
    pub async fn register(&self, token: &str, user_id: UserId, ttl: Duration) -> AppResult<()> {
        self.cache
            .set(&keys::session(token), &user_id.to_string(), ttl)
            .await
    }

    /// Returns the owner of `token` if its entry is still live.
    pub async fn lookup(&self, token: &str) -> AppResult<Option<UserId>> {
        let Some(raw) = self.cache.get(&keys::session(token)).await? else {
            return Ok(None);
        };
        raw.parse::<UserId>().map(Some).map_err(|e| {
            AppError::with_source(ErrorKind::Cache, "Corrupt session entry", e)
        })
    }

    /// Deletes the entry for `token`. Deleting a missing entry succeeds.
    pub async fn remove(&self, token: &str) -> AppResult<()> {
        self.cache.delete(&keys::session(token)).await
    }

    /// Whether the backing store answers.
    pub async fn health_check(&self) -> AppResult<bool> {
        self.cache.health_check().await
    }
}

/// Short, non-reversible token identifier for logs.
pub fn token_fingerprint(token: &str) -> String {
    let digest = Sha256::digest(token.as_bytes());
    hex::encode(&digest[..4])
}

#[cfg(test)]
mod tests {
    use tokengate_cache::memory::MemoryCacheProvider;

    use super::*;

    fn store() -> SessionStore {
        let cache = CacheManager::from_provider(
            Arc::new(MemoryCacheProvider::default()),
            Duration::from_secs(1),
        );
        SessionStore::new(Arc::new(cache))
    }

    #[tokio::test]
    async fn test_register_lookup_remove() {
        let store = store();
        store
            .register("tok", UserId::new(7), Duration::from_secs(60))
            .await
            .unwrap();
        assert_eq!(store.lookup("tok").await.unwrap(), Some(UserId::new(7)));

        store.remove("tok").await.unwrap();
        assert_eq!(store.lookup("tok").await.unwrap(), None);
        store.remove("tok").await.unwrap();
    }

    #[test]
    fn test_fingerprint() {
        let fp = token_fingerprint("eyJhbGciOi.payload.sig");
        assert_eq!(fp.len(), 8);
        assert_eq!(fp, token_fingerprint("eyJhbGciOi.payload.sig"));
        assert_ne!(fp, token_fingerprint("another"));
    }
}
