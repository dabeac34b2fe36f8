//! Per-request bearer token authentication.

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use tokengate_core::types::UserId;

use super::store::{SessionStore, token_fingerprint};
use crate::error::AuthError;
use crate::jwt::JwtDecoder;

const BEARER_PREFIX: &str = "Bearer ";

/// The principal attached to an accepted request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// The verified owner of the token.
    pub user_id: UserId,
    /// The raw token, kept so the request can revoke its own session.
    pub token: String,
    /// Token expiry.
    pub expires_at: DateTime<Utc>,
}

/// Accepts a request only when its token verifies, has not expired, and
/// still has a live session entry.
#[derive(Debug, Clone)]
pub struct RequestAuthenticator {
    decoder: JwtDecoder,
    sessions: SessionStore,
}

impl RequestAuthenticator {
    /// Creates an authenticator.
    pub fn new(decoder: JwtDecoder, sessions: SessionStore) -> Self {
        Self { decoder, sessions }
    }

    /// Authenticates from the raw `Authorization` header value.
    pub async fn authenticate(
        &self,
        authorization: Option<&str>,
    ) -> Result<AuthenticatedUser, AuthError> {
        let token = authorization
            .and_then(bearer_token)
            .ok_or(AuthError::MissingToken)?;
        self.authenticate_token(token).await
    }

    /// Authenticates a bare token string.
    pub async fn authenticate_token(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        // Signature and expiry first: no store round-trip for forged or stale tokens.
        let claims = self.decoder.decode(token).inspect_err(|e| {
            debug!(token = %token_fingerprint(token), reason = e.reason(), "Token rejected");
        })?;

        let owner = match self.sessions.lookup(token).await {
            Ok(owner) => owner,
            Err(e) => {
                warn!(
                    token = %token_fingerprint(token),
                    error = %e,
                    "Session store lookup failed, rejecting request"
                );
                return Err(AuthError::StoreUnavailable(e));
            }
        };

        match owner {
            Some(owner) if owner == claims.user_id() => Ok(AuthenticatedUser {
                user_id: owner,
                token: token.to_string(),
                expires_at: claims.expires_at(),
            }),
            Some(owner) => {
                warn!(
                    token = %token_fingerprint(token),
                    claimed = %claims.user_id(),
                    stored = %owner,
                    "Session entry owner does not match token subject"
                );
                Err(AuthError::SessionAbsent)
            }
            None => {
                debug!(token = %token_fingerprint(token), "No live session for token");
                Err(AuthError::SessionAbsent)
            }
        }
    }
}

/// Extracts the token from an `Authorization: Bearer <token>` value.
pub fn bearer_token(header: &str) -> Option<&str> {
    let token = header.strip_prefix(BEARER_PREFIX)?.trim();
    if token.is_empty() || token.contains(char::is_whitespace) {
        return None;
    }
    Some(token)
}
