//! Store traits (credentials, posts) and their implementations.

pub mod memory;
pub mod post;
pub mod user;

use async_trait::async_trait;

use tokengate_core::result::AppResult;
use tokengate_core::types::{PageRequest, PageResponse, PostId, UserId};
use tokengate_entity::post::{NewPost, Post, PostUpdate};
use tokengate_entity::user::{NewUser, User, UserProfileUpdate};

pub use memory::{MemoryPostRepository, MemoryUserRepository};
pub use post::PostRepository;
pub use user::UserRepository;

/// Persistence of user identity and password hash.
///
/// Email addresses are unique and matched case-insensitively. Creating a
/// user whose email is taken fails with an `ErrorKind::Conflict` error.
#[async_trait]
pub trait CredentialStore: Send + Sync + std::fmt::Debug + 'static {
    /// Find a user by primary key.
    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>>;

    /// Find a user by email.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Insert a new user and return it with its assigned identifier.
    async fn create(&self, user: &NewUser) -> AppResult<User>;

    /// Apply the present profile fields and return the updated user.
    ///
    /// Only the profile columns are written; a concurrent password change
    /// is never overwritten. Fails with `NotFound` if the user is gone.
    async fn update_profile(&self, id: UserId, update: &UserProfileUpdate) -> AppResult<User>;

    /// Replace the stored password hash. Fails with `NotFound` if the user is gone.
    async fn update_password_hash(&self, id: UserId, password_hash: &str) -> AppResult<()>;

    /// Delete a user. Fails with `NotFound` if it does not exist.
    async fn delete(&self, id: UserId) -> AppResult<()>;
}

/// Persistence of posts. Every operation is scoped to the owning user: a
/// post owned by someone else behaves exactly like a missing one.
#[async_trait]
pub trait PostStore: Send + Sync + std::fmt::Debug + 'static {
    /// Insert a post owned by `owner`.
    async fn create(&self, owner: UserId, post: &NewPost) -> AppResult<Post>;

    /// Find one of `owner`'s posts.
    async fn find_owned(&self, owner: UserId, id: PostId) -> AppResult<Option<Post>>;

    /// One page of `owner`'s posts, oldest first.
    async fn list_owned(
        &self,
        owner: UserId,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Post>>;

    /// Apply the present fields to one of `owner`'s posts.
    async fn update_owned(
        &self,
        owner: UserId,
        id: PostId,
        update: &PostUpdate,
    ) -> AppResult<Option<Post>>;

    /// Delete one of `owner`'s posts. Returns whether a post was removed.
    async fn delete_owned(&self, owner: UserId, id: PostId) -> AppResult<bool>;
}
