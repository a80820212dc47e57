//! Forum Data Structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::SharedError;
use crate::shared::models::pagination::Pagination;

/// A discussion thread as stored
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForumThread {
    pub id: Uuid,
    pub title: String,
    /// Opening post body
    pub content: String,
    /// Freeform category label ("General", "DeFi", ...)
    pub category: String,
    pub is_pinned: bool,
    pub is_hot: bool,
    pub author_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A reply within a thread, as stored
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForumPost {
    pub id: Uuid,
    pub thread_id: Uuid,
    pub author_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Thread row for the forum listing, with the author resolved
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreadSummary {
    pub id: Uuid,
    pub title: String,
    /// Author's name, else username, else "Anonymous"
    pub author: String,
    /// Reply count
    pub replies: i64,
    /// Last update (creation or latest reply)
    pub last_activity: DateTime<Utc>,
    pub is_hot: bool,
    pub category: String,
    pub is_pinned: bool,
}

/// A reply with its author resolved for display
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostView {
    pub id: Uuid,
    pub author: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Full thread with its replies
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreadDetail {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub category: String,
    pub author: String,
    pub is_pinned: bool,
    pub is_hot: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub posts: Vec<PostView>,
}

/// Response for listing threads
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreadListResponse {
    pub threads: Vec<ThreadSummary>,
    pub pagination: Pagination,
}

/// Request body for opening a thread
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct NewThread {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub category: String,
}

impl NewThread {
    pub fn validate(&self) -> Result<(), SharedError> {
        for (field, value) in [
            ("title", &self.title),
            ("content", &self.content),
            ("category", &self.category),
        ] {
            if value.trim().is_empty() {
                return Err(SharedError::validation(field, "This field is required"));
            }
        }
        Ok(())
    }
}

/// Request body for replying to a thread
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct NewPost {
    #[serde(default)]
    pub content: String,
}

impl NewPost {
    pub fn validate(&self) -> Result<(), SharedError> {
        if self.content.trim().is_empty() {
            return Err(SharedError::validation("content", "This field is required"));
        }
        Ok(())
    }
}
