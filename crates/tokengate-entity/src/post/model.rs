//! Post entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use tokengate_core::types::{PostId, UserId};

/// A post written by a user. Only its owner can read or change it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Post {
    /// Unique post identifier.
    pub id: PostId,
    /// The owning user.
    pub user_id: UserId,
    /// Title.
    pub title: String,
    /// Body text.
    pub body: String,
    /// When the post was created.
    pub created_at: DateTime<Utc>,
    /// When the post was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a post. The owner comes from the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPost {
    /// Title.
    pub title: String,
    /// Body text.
    pub body: String,
}

/// Partial update of a post.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostUpdate {
    /// New title.
    pub title: Option<String>,
    /// New body.
    pub body: Option<String>,
}

impl PostUpdate {
    /// Whether no field would change.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.body.is_none()
    }

    /// Copy the present fields onto `post`.
    pub fn apply(&self, post: &mut Post) {
        if let Some(title) = &self.title {
            post.title = title.clone();
        }
        if let Some(body) = &self.body {
            post.body = body.clone();
        }
    }
}
