//! JWT claims structure carried by every session token.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tokengate_core::types::UserId;

/// JWT claims payload embedded in every session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the owning user.
    pub sub: UserId,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
    /// Random token id; two tokens for the same user in the same second differ.
    pub jti: Uuid,
}

impl Claims {
    /// Builds claims for `user_id` valid for `lifetime` starting at `now`.
    pub fn new(user_id: UserId, now: DateTime<Utc>, lifetime: Duration) -> Self {
        Self {
            sub: user_id,
            iat: now.timestamp(),
            exp: (now + lifetime).timestamp(),
            jti: Uuid::new_v4(),
        }
    }

    /// Returns the user ID from the subject claim.
    pub fn user_id(&self) -> UserId {
        self.sub
    }

    /// Returns the expiration as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or(DateTime::<Utc>::MIN_UTC)
    }

    /// Whether the token is expired at `now`, allowing `leeway_seconds` of skew.
    pub fn is_expired_at(&self, now: DateTime<Utc>, leeway_seconds: u64) -> bool {
        now.timestamp() >= self.exp.saturating_add(leeway_seconds as i64)
    }

    /// Remaining validity at `now` (zero if expired).
    pub fn remaining(&self, now: DateTime<Utc>) -> std::time::Duration {
        let remaining = self.exp - now.timestamp();
        if remaining > 0 {
            std::time::Duration::from_secs(remaining as u64)
        } else {
            std::time::Duration::ZERO
        }
    }
}
