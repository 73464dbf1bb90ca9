use serde::{Deserialize, Serialize};

use crate::user::Author;

/// Moderation state of a post. New submissions start out pending and become
/// visible in the public feed once an admin approves them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Approved,
    Pending,
}

impl PostStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Pending => "pending",
        }
    }
}

/// A user-submitted content item. Timestamps are opaque backend strings and
/// are never parsed client-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub author: Author,
    pub topic: String,
    pub title: String,
    pub image_url: String,
    pub content: String,
    pub created_at: String,
    pub status: PostStatus,
    pub likes: i64,
    pub dislikes: i64,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

/// A comment owned by exactly one post.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub author: Author,
    pub content: String,
    pub created_at: String,
}

/// The two vote directions a user can cast on a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteKind {
    Like,
    Dislike,
}
