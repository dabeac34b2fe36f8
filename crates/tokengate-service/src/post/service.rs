//! Post CRUD on behalf of an authenticated user.

use std::sync::Arc;

use tracing::info;

use tokengate_core::error::AppError;
use tokengate_core::types::{PageRequest, PageResponse, PostId, UserId};
use tokengate_database::{CredentialStore, PostStore};
use tokengate_entity::post::{NewPost, Post, PostUpdate};

/// Manages posts for their owners.
///
/// Every operation first checks that the owner still has an account: a
/// token that outlives its account reaches these methods and must not
/// create or read anything.
#[derive(Debug, Clone)]
pub struct PostService {
    /// Post store.
    posts: Arc<dyn PostStore>,
    /// Credential store, for the owner check.
    users: Arc<dyn CredentialStore>,
}

impl PostService {
    /// Creates a new post service.
    pub fn new(posts: Arc<dyn PostStore>, users: Arc<dyn CredentialStore>) -> Self {
        Self { posts, users }
    }

    /// Creates a post owned by `owner`.
    pub async fn create(&self, owner: UserId, post: NewPost) -> Result<Post, AppError> {
        self.ensure_owner(owner).await?;
        let post = self.posts.create(owner, &post).await?;
        info!(user_id = %owner, post_id = %post.id, "Post created");
        Ok(post)
    }

    /// Lists one page of the owner's posts.
    pub async fn list(
        &self,
        owner: UserId,
        page: PageRequest,
    ) -> Result<PageResponse<Post>, AppError> {
        self.ensure_owner(owner).await?;
        self.posts.list_owned(owner, &page).await
    }

    /// Gets one of the owner's posts. Someone else's post is not found.
    pub async fn get(&self, owner: UserId, id: PostId) -> Result<Post, AppError> {
        self.ensure_owner(owner).await?;
        self.posts
            .find_owned(owner, id)
            .await?
            .ok_or_else(|| AppError::not_found("Post not found"))
    }

    /// Applies a partial update to one of the owner's posts.
    pub async fn update(
        &self,
        owner: UserId,
        id: PostId,
        update: PostUpdate,
    ) -> Result<Post, AppError> {
        if update.is_empty() {
            return self.get(owner, id).await;
        }

        self.ensure_owner(owner).await?;
        let post = self
            .posts
            .update_owned(owner, id, &update)
            .await?
            .ok_or_else(|| AppError::not_found("Post not found"))?;

        info!(user_id = %owner, post_id = %id, "Post updated");
        Ok(post)
    }

    /// Deletes one of the owner's posts.
    pub async fn delete(&self, owner: UserId, id: PostId) -> Result<(), AppError> {
        self.ensure_owner(owner).await?;
        if !self.posts.delete_owned(owner, id).await? {
            return Err(AppError::not_found("Post not found"));
        }

        info!(user_id = %owner, post_id = %id, "Post deleted");
        Ok(())
    }

    async fn ensure_owner(&self, owner: UserId) -> Result<(), AppError> {
        match self.users.find_by_id(owner).await? {
            Some(_) => Ok(()),
            None => Err(AppError::not_found("User not found")),
        }
    }
}
