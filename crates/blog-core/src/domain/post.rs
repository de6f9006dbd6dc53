use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::draft::PostDraft;
use super::timestamp;

/// Title used when a post is written without one.
pub const DEFAULT_TITLE: &str = "Untitled";

/// Author used when a post is written without one.
pub const DEFAULT_AUTHOR: &str = "Anonymous";

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

fn default_author() -> String {
    DEFAULT_AUTHOR.to_string()
}

/// Post entity - a single blog post as held by the record store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default = "default_author")]
    pub author: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post with a generated id, stamped with the current time.
    pub fn new(draft: PostDraft) -> Self {
        Self::new_at(draft, timestamp::now())
    }

    /// Create a new post stamped with `now` for both timestamps.
    pub fn new_at(draft: PostDraft, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: draft.title,
            content: draft.content,
            author: draft.author,
            tags: draft.tags,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace every writable field with the draft's values.
    ///
    /// `id` and `created_at` are untouched; `updated_at` never drops below `created_at`.
    pub fn apply(&mut self, draft: PostDraft, updated_at: DateTime<Utc>) {
        self.title = draft.title;
        self.content = draft.content;
        self.author = draft.author;
        self.tags = draft.tags;
        self.updated_at = updated_at.max(self.created_at);
    }
}
