//! Token issuance: sign, then register the session.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

use tokengate_core::config::AuthConfig;
use tokengate_core::traits::Clock;
use tokengate_core::types::UserId;

use super::store::{SessionStore, token_fingerprint};
use crate::error::AuthError;
use crate::jwt::{Claims, JwtEncoder};

/// A freshly issued, registered token.
#[derive(Debug, Clone, Serialize)]
pub struct IssuedToken {
    /// The signed bearer token.
    pub token: String,
    /// Owner of the token.
    pub user_id: UserId,
    /// When the token and its session entry lapse.
    pub expires_at: DateTime<Utc>,
}

/// Creates signed tokens and records each one in the session store.
#[derive(Debug, Clone)]
pub struct TokenIssuer {
    encoder: JwtEncoder,
    sessions: SessionStore,
    clock: Arc<dyn Clock>,
    lifetime: Duration,
}

impl TokenIssuer {
    /// Creates an issuer using the secret and lifetime from configuration.
    pub fn new(config: &AuthConfig, sessions: SessionStore, clock: Arc<dyn Clock>) -> Self {
        Self {
            encoder: JwtEncoder::new(config),
            sessions,
            clock,
            lifetime: config.session_lifetime(),
        }
    }

    /// Issues a token for `user_id`.
    ///
    /// The token is only returned once its session entry has been written;
    /// a signed token whose entry could not be stored is discarded.
    pub async fn issue(&self, user_id: UserId) -> Result<IssuedToken, AuthError> {
        let lifetime = chrono::Duration::seconds(self.lifetime.as_secs() as i64);
        let claims = Claims::new(user_id, self.clock.now(), lifetime);
        let token = self.encoder.encode(&claims).map_err(AuthError::Issuance)?;

        if let Err(e) = self.sessions.register(&token, user_id, self.lifetime).await {
            warn!(user_id = %user_id, error = %e, "Could not register session");
            return Err(AuthError::Issuance(e));
        }

        info!(
            user_id = %user_id,
            token = %token_fingerprint(&token),
            "Session issued"
        );

        Ok(IssuedToken {
            token,
            user_id,
            expires_at: claims.expires_at(),
        })
    }
}
