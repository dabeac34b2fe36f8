//! In-process credential store.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use tokengate_core::error::AppError;
use tokengate_core::result::AppResult;
use tokengate_core::types::UserId;
use tokengate_entity::user::model::normalize_email;
use tokengate_entity::user::{NewUser, User, UserProfileUpdate};

use crate::repositories::CredentialStore;

/// Credential store kept in a hash map, for tests and single-node demos.
#[derive(Debug)]
pub struct MemoryUserRepository {
    users: RwLock<HashMap<UserId, User>>,
    next_id: AtomicI64,
}

impl MemoryUserRepository {
    /// Create an empty store. Identifiers start at 1.
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Number of stored users.
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    /// Whether the store holds no users.
    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

impl Default for MemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CredentialStore for MemoryUserRepository {
    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let email = normalize_email(email);
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn create(&self, user: &NewUser) -> AppResult<User> {
        let email = user.normalized_email();
        // Uniqueness check and insert happen under one write lock.
        let mut users = self.users.write().await;
        if users.values().any(|u| u.email == email) {
            return Err(AppError::conflict("Email already registered"));
        }

        let now = Utc::now();
        let created = User {
            id: UserId::new(self.next_id.fetch_add(1, Ordering::SeqCst)),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            age: user.age,
            email,
            password_hash: user.password_hash.clone(),
            created_at: now,
            updated_at: now,
        };
        users.insert(created.id, created.clone());
        Ok(created)
    }

    async fn update_profile(&self, id: UserId, update: &UserProfileUpdate) -> AppResult<User> {
        let mut users = self.users.write().await;
        let stored = users
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found("User not found"))?;

        update.apply(stored);
        stored.updated_at = Utc::now();
        Ok(stored.clone())
    }

    async fn update_password_hash(&self, id: UserId, password_hash: &str) -> AppResult<()> {
        let mut users = self.users.write().await;
        let stored = users
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found("User not found"))?;

        stored.password_hash = password_hash.to_string();
        stored.updated_at = Utc::now();
        Ok(())
    }

    async fn delete(&self, id: UserId) -> AppResult<()> {
        self.users
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::not_found("User not found"))
    }
}
