//! PostgreSQL post repository.

use async_trait::async_trait;
use sqlx::PgPool;

use tokengate_core::error::{AppError, ErrorKind};
use tokengate_core::result::AppResult;
use tokengate_core::types::{PageRequest, PageResponse, PostId, UserId};
use tokengate_entity::post::{NewPost, Post, PostUpdate};

use super::PostStore;

/// Repository for owner-scoped post CRUD backed by PostgreSQL.
#[derive(Debug, Clone)]
pub struct PostRepository {
    pool: PgPool,
}

impl PostRepository {
    /// Create a new post repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostStore for PostRepository {
    async fn create(&self, owner: UserId, post: &NewPost) -> AppResult<Post> {
        sqlx::query_as::<_, Post>(
            "INSERT INTO posts (user_id, title, body) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(owner)
        .bind(&post.title)
        .bind(&post.body)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Could not create post", e))
    }

    async fn find_owned(&self, owner: UserId, id: PostId) -> AppResult<Option<Post>> {
        sqlx::query_as::<_, Post>("SELECT * FROM posts WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(owner)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find post", e))
    }

    async fn list_owned(
        &self,
        owner: UserId,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Post>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM posts WHERE user_id = $1")
            .bind(owner)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count posts", e))?;

        let posts = sqlx::query_as::<_, Post>(
            "SELECT * FROM posts WHERE user_id = $1 ORDER BY id ASC LIMIT $2 OFFSET $3",
        )
        .bind(owner)
        .bind(page.limit as i64)
        .bind(i64::try_from(page.offset()).unwrap_or(i64::MAX))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list posts", e))?;

        Ok(PageResponse::new(posts, page, total as u64))
    }

    async fn update_owned(
        &self,
        owner: UserId,
        id: PostId,
        update: &PostUpdate,
    ) -> AppResult<Option<Post>> {
        sqlx::query_as::<_, Post>(
            "UPDATE posts SET title = COALESCE($3, title), body = COALESCE($4, body), \
             updated_at = NOW() \
             WHERE id = $1 AND user_id = $2 RETURNING *",
        )
        .bind(id)
        .bind(owner)
        .bind(update.title.as_deref())
        .bind(update.body.as_deref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Could not update post", e))
    }

    async fn delete_owned(&self, owner: UserId, id: PostId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(owner)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Could not delete post", e))?;

        Ok(result.rows_affected() > 0)
    }
}
