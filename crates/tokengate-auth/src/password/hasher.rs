//! Argon2id password hashing and verification.

use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{
        PasswordHash, PasswordHasher as ArgonHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};
use tracing::warn;

use tokengate_core::config::AuthConfig;
use tokengate_core::error::{AppError, ErrorKind};

/// PHC prefix shared by every Argon2 variant (`$argon2id$`, `$argon2i$`, ...).
const ARGON2_PREFIX: &str = "$argon2";

/// Handles password hashing and verification using Argon2id.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    params: Params,
}

impl PasswordHasher {
    /// Creates a hasher with the work factor from configuration.
    pub fn new(config: &AuthConfig) -> Result<Self, AppError> {
        let params = Params::new(
            config.argon2_memory_kib,
            config.argon2_iterations,
            config.argon2_parallelism,
            None,
        )
        .map_err(|e| AppError::configuration(format!("Invalid Argon2 parameters: {e}")))?;
        Ok(Self { params })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    /// Hashes a plaintext password with a fresh random salt.
    pub fn hash(&self, password: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| {
                AppError::new(ErrorKind::Internal, format!("Password hashing failed: {e}"))
            })?;

        Ok(hash.to_string())
    }

    /// Verifies a plaintext password against a stored hash.
    ///
    /// Any failure, including a hash that does not parse, yields `false`.
    /// The parameters embedded in the stored hash are used, not the
    /// configured ones, so changing the work factor keeps old hashes valid.
    pub fn verify(&self, password: &str, hash: &str) -> bool {
        let parsed = match PasswordHash::new(hash) {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!(error = %e, "Stored password hash is malformed");
                return false;
            }
        };

        match self.argon2().verify_password(password.as_bytes(), &parsed) {
            Ok(()) => true,
            Err(argon2::password_hash::Error::Password) => false,
            Err(e) => {
                warn!(error = %e, "Password verification failed");
                false
            }
        }
    }

    /// Whether `value` is already an Argon2 PHC string.
    pub fn is_hashed(value: &str) -> bool {
        value.starts_with(ARGON2_PREFIX) && PasswordHash::new(value).is_ok()
    }

    /// Hashes `value` unless it is already a hash.
    ///
    /// Run before every credential write so that saving a user whose
    /// password field already holds a hash never hashes it a second time.
    pub fn hash_if_needed(&self, value: &str) -> Result<String, AppError> {
        if Self::is_hashed(value) {
            return Ok(value.to_string());
        }
        self.hash(value)
    }
}
