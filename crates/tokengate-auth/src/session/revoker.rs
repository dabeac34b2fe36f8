//! Best-effort session revocation.

use tracing::{info, warn};

use super::store::{SessionStore, token_fingerprint};

/// Removes session entries so their tokens stop authenticating.
#[derive(Debug, Clone)]
pub struct SessionRevoker {
    sessions: SessionStore,
}

impl SessionRevoker {
    /// Creates a revoker over the session store.
    pub fn new(sessions: SessionStore) -> Self {
        Self { sessions }
    }

    /// Revokes `token`.
    ///
    /// Never fails: revoking an unknown or already-revoked token is a no-op,
    /// and a store failure is logged and swallowed since the entry lapses on
    /// its own TTL anyway.
    pub async fn revoke(&self, token: &str) {
        match self.sessions.remove(token).await {
            Ok(()) => info!(token = %token_fingerprint(token), "Session revoked"),
            Err(e) => warn!(
                token = %token_fingerprint(token),
                error = %e,
                "Session revocation failed; entry will expire on its own"
            ),
        }
    }
}
