use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Store-assigned post identifier.
pub type PostId = i32;

/// Publication status of a post.
///
/// `Trash` is an ordinary value; nothing treats it as a soft delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Publish,
    Draft,
    Trash,
}

impl PostStatus {
    pub const ALL: [PostStatus; 3] = [PostStatus::Publish, PostStatus::Draft, PostStatus::Trash];

    /// Parse a status case-insensitively, ignoring surrounding whitespace.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(raw))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Publish => "publish",
            PostStatus::Draft => "draft",
            PostStatus::Trash => "trash",
        }
    }
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Post entity - a stored article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub category: String,
    pub status: PostStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Apply a partial update. Only the fields present in `changes` are
    /// overwritten; `updated_at` never moves backwards.
    pub fn apply(&mut self, changes: PostChanges, now: DateTime<Utc>) {
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(content) = changes.content {
            self.content = content;
        }
        if let Some(category) = changes.category {
            self.category = category;
        }
        if let Some(status) = changes.status {
            self.status = status;
        }
        self.updated_at = now.max(self.updated_at);
    }
}

/// Request body for creating a post.
///
/// Missing fields decode as empty strings so the validator reports them as
/// required rather than the decoder rejecting the body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePost {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub status: String,
}

/// Request body for a partial update. Absent, null, or blank fields mean
/// "leave unchanged".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePost {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// A validated create request, ready to persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub category: String,
    pub status: PostStatus,
}

/// A validated partial update. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostChanges {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub status: Option<PostStatus>,
}

/// One page of posts, newest first, plus the total row count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostPage {
    pub data: Vec<Post>,
    pub limit: u64,
    pub offset: u64,
    pub total_count: u64,
}
