//! Authentication configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Token signing, session lifetime, and credential policy.
///
/// Read once at startup; every component that needs it receives its own
/// copy or an `Arc`, and nothing mutates it afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for token signing (HMAC-SHA256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Lifetime of an issued token and of its session store entry, in minutes.
    #[serde(default = "default_session_lifetime")]
    pub session_lifetime_minutes: u64,
    /// Clock-skew tolerance applied to the expiry check, in seconds.
    #[serde(default)]
    pub token_leeway_seconds: u64,
    /// Minimum password length.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
    /// Require a zxcvbn strength score of at least 3 for new passwords.
    #[serde(default)]
    pub require_strong_passwords: bool,
    /// Argon2 memory cost in KiB.
    #[serde(default = "default_argon2_memory")]
    pub argon2_memory_kib: u32,
    /// Argon2 iteration count.
    #[serde(default = "default_argon2_iterations")]
    pub argon2_iterations: u32,
    /// Argon2 degree of parallelism.
    #[serde(default = "default_argon2_parallelism")]
    pub argon2_parallelism: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            session_lifetime_minutes: default_session_lifetime(),
            token_leeway_seconds: 0,
            password_min_length: default_password_min(),
            require_strong_passwords: false,
            argon2_memory_kib: default_argon2_memory(),
            argon2_iterations: default_argon2_iterations(),
            argon2_parallelism: default_argon2_parallelism(),
        }
    }
}

impl AuthConfig {
    /// Session lifetime as a [`Duration`].
    pub fn session_lifetime(&self) -> Duration {
        Duration::from_secs(self.session_lifetime_minutes * 60)
    }

    /// Validate settings that cannot be defaulted safely.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.jwt_secret.trim().is_empty() {
            return Err(AppError::configuration("auth.jwt_secret must not be empty"));
        }
        if self.session_lifetime_minutes == 0 {
            return Err(AppError::configuration(
                "auth.session_lifetime_minutes must be greater than zero",
            ));
        }
        Ok(())
    }
}

fn default_jwt_secret() -> String {
    "your-super-secret-jwt-key-change-it-in-production".to_string()
}

fn default_session_lifetime() -> u64 {
    24 * 60
}

fn default_password_min() -> usize {
    6
}

fn default_argon2_memory() -> u32 {
    19 * 1024
}

fn default_argon2_iterations() -> u32 {
    2
}

fn default_argon2_parallelism() -> u32 {
    1
}
