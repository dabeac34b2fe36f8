//! In-process post store.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use tokengate_core::result::AppResult;
use tokengate_core::types::{PageRequest, PageResponse, PostId, UserId};
use tokengate_entity::post::{NewPost, Post, PostUpdate};

use crate::repositories::PostStore;

/// Post store kept in an ordered map, so listings come out oldest first.
#[derive(Debug)]
pub struct MemoryPostRepository {
    posts: RwLock<BTreeMap<PostId, Post>>,
    next_id: AtomicI64,
}

impl MemoryPostRepository {
    /// Create an empty store. Identifiers start at 1.
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for MemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostStore for MemoryPostRepository {
    async fn create(&self, owner: UserId, post: &NewPost) -> AppResult<Post> {
        let now = Utc::now();
        let created = Post {
            id: PostId::new(self.next_id.fetch_add(1, Ordering::SeqCst)),
            user_id: owner,
            title: post.title.clone(),
            body: post.body.clone(),
            created_at: now,
            updated_at: now,
        };
        self.posts.write().await.insert(created.id, created.clone());
        Ok(created)
    }

    async fn find_owned(&self, owner: UserId, id: PostId) -> AppResult<Option<Post>> {
        Ok(self
            .posts
            .read()
            .await
            .get(&id)
            .filter(|p| p.user_id == owner)
            .cloned())
    }

    async fn list_owned(
        &self,
        owner: UserId,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Post>> {
        let posts = self.posts.read().await;
        let owned: Vec<&Post> = posts.values().filter(|p| p.user_id == owner).collect();
        let items = owned
            .iter()
            .skip(page.offset() as usize)
            .take(page.limit as usize)
            .map(|p| (*p).clone())
            .collect();

        Ok(PageResponse::new(items, page, owned.len() as u64))
    }

    async fn update_owned(
        &self,
        owner: UserId,
        id: PostId,
        update: &PostUpdate,
    ) -> AppResult<Option<Post>> {
        let mut posts = self.posts.write().await;
        let Some(post) = posts.get_mut(&id).filter(|p| p.user_id == owner) else {
            return Ok(None);
        };

        update.apply(post);
        post.updated_at = Utc::now();
        Ok(Some(post.clone()))
    }

    async fn delete_owned(&self, owner: UserId, id: PostId) -> AppResult<bool> {
        let mut posts = self.posts.write().await;
        if posts.get(&id).is_some_and(|p| p.user_id == owner) {
            posts.remove(&id);
            return Ok(true);
        }
        Ok(false)
    }
}
