//! JWT signature and expiry validation.

use std::sync::Arc;

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use tokengate_core::config::AuthConfig;
use tokengate_core::traits::Clock;

use super::claims::Claims;
use crate::error::AuthError;

/// Verifies token signatures and checks expiry against a [`Clock`].
///
/// `jsonwebtoken` reads the system time for `exp`; that check is turned off
/// and done here against the injected clock instead.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
    /// Clock-skew tolerance in seconds.
    leeway_seconds: u64,
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .field("leeway_seconds", &self.leeway_seconds)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig, clock: Arc<dyn Clock>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
            leeway_seconds: config.token_leeway_seconds,
            clock,
        }
    }

    /// Decodes a token, verifying its signature and that it has not expired.
    pub fn decode(&self, token: &str) -> Result<Claims, AuthError> {
        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                let detail = match e.kind() {
                    jsonwebtoken::errors::ErrorKind::InvalidToken => "malformed token".to_string(),
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        "signature mismatch".to_string()
                    }
                    _ => format!("validation failed: {e}"),
                };
                AuthError::InvalidToken(detail)
            })?
            .claims;

        if claims.is_expired_at(self.clock.now(), self.leeway_seconds) {
            return Err(AuthError::InvalidToken("token expired".into()));
        }

        Ok(claims)
    }
}
