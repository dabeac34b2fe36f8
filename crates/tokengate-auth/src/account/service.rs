//! Account flows: signup, login, logout, profile and credential changes.

use std::sync::Arc;

use tracing::{info, warn};

use tokengate_core::error::{AppError, ErrorKind};
use tokengate_core::result::AppResult;
use tokengate_core::types::UserId;
use tokengate_database::CredentialStore;
use tokengate_entity::user::{NewUser, User, UserProfileUpdate};

use crate::password::{PasswordHasher, PasswordValidator};
use crate::session::{AuthenticatedUser, IssuedToken, SessionRevoker, TokenIssuer};

/// Everything needed to open an account.
#[derive(Debug, Clone)]
pub struct Registration {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Age in years.
    pub age: i32,
    /// Email address.
    pub email: String,
    /// Plaintext password.
    pub password: String,
}

/// Coordinates the credential store with token issuance and revocation.
#[derive(Debug, Clone)]
pub struct AccountService {
    users: Arc<dyn CredentialStore>,
    hasher: PasswordHasher,
    validator: PasswordValidator,
    issuer: TokenIssuer,
    revoker: SessionRevoker,
}

impl AccountService {
    /// Creates the service.
    pub fn new(
        users: Arc<dyn CredentialStore>,
        hasher: PasswordHasher,
        validator: PasswordValidator,
        issuer: TokenIssuer,
        revoker: SessionRevoker,
    ) -> Self {
        Self {
            users,
            hasher,
            validator,
            issuer,
            revoker,
        }
    }

    /// Creates the account and logs it in.
    ///
    /// If the account is created but no token can be issued, the error is
    /// returned and the caller is not logged in; the account stays and the
    /// user can log in later.
    pub async fn signup(&self, registration: Registration) -> AppResult<IssuedToken> {
        self.validator.validate(&registration.password)?;

        let password_hash = self.hash_if_needed(registration.password).await?;
        let user = self
            .users
            .create(&NewUser {
                first_name: registration.first_name,
                last_name: registration.last_name,
                age: registration.age,
                email: registration.email,
                password_hash,
            })
            .await?;

        info!(user_id = %user.id, "Account created");
        Ok(self.issuer.issue(user.id).await?)
    }

    /// Checks credentials and issues a fresh token.
    ///
    /// An unknown email and a wrong password produce the same error.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<IssuedToken> {
        let Some(user) = self.users.find_by_email(email).await? else {
            info!(reason = "unknown_email", "Login rejected");
            return Err(invalid_credentials());
        };

        if !self.verify(password, &user.password_hash).await {
            info!(user_id = %user.id, reason = "wrong_password", "Login rejected");
            return Err(invalid_credentials());
        }

        Ok(self.issuer.issue(user.id).await?)
    }

    /// Revokes every given token. Always succeeds.
    pub async fn logout<'a>(&self, tokens: impl IntoIterator<Item = &'a str>) {
        for token in tokens {
            self.revoker.revoke(token).await;
        }
    }

    /// Loads the authenticated user's record.
    pub async fn profile(&self, user_id: UserId) -> AppResult<User> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Applies a profile edit. The stored password hash is left as is.
    pub async fn update_profile(
        &self,
        user_id: UserId,
        update: &UserProfileUpdate,
    ) -> AppResult<User> {
        if update.is_empty() {
            return self.profile(user_id).await;
        }
        self.users.update_profile(user_id, update).await
    }

    /// Replaces the password after checking the current one, then revokes
    /// the token that made the request.
    pub async fn change_password(
        &self,
        auth: &AuthenticatedUser,
        current_password: &str,
        new_password: &str,
    ) -> AppResult<()> {
        let user = self.profile(auth.user_id).await?;

        if !self.verify(current_password, &user.password_hash).await {
            return Err(invalid_credentials());
        }
        self.validator.validate(new_password)?;
        self.validator
            .validate_not_same(current_password, new_password)?;

        self.store_password(user.id, new_password.to_string()).await?;
        info!(user_id = %auth.user_id, "Password changed");

        self.revoker.revoke(&auth.token).await;
        Ok(())
    }

    /// Revokes the current token, then deletes the account.
    pub async fn delete_account(&self, auth: &AuthenticatedUser) -> AppResult<()> {
        self.revoker.revoke(&auth.token).await;
        self.users.delete(auth.user_id).await?;
        info!(user_id = %auth.user_id, "Account deleted");
        Ok(())
    }

    /// Every password write goes through here so the hash guard always runs.
    async fn store_password(&self, user_id: UserId, password: String) -> AppResult<()> {
        let password_hash = self.hash_if_needed(password).await?;
        self.users
            .update_password_hash(user_id, &password_hash)
            .await
    }

    async fn hash_if_needed(&self, value: String) -> AppResult<String> {
        let hasher = self.hasher.clone();
        tokio::task::spawn_blocking(move || hasher.hash_if_needed(&value))
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Internal, "Hashing task failed", e))?
    }

    async fn verify(&self, password: &str, hash: &str) -> bool {
        let hasher = self.hasher.clone();
        let password = password.to_string();
        let hash = hash.to_string();
        match tokio::task::spawn_blocking(move || hasher.verify(&password, &hash)).await {
            Ok(valid) => valid,
            Err(e) => {
                warn!(error = %e, "Verification task failed");
                false
            }
        }
    }
}

fn invalid_credentials() -> AppError {
    AppError::authentication("Invalid credentials")
}
