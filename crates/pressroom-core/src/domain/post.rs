use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::category::DEFAULT_CATEGORY;

pub const DEFAULT_TITLE: &str = "Untitled";
pub const DEFAULT_AUTHOR: &str = "Anonymous";

/// Post entity - a single blog entry.
///
/// Field names serialize in camelCase to match the durable collection format.
/// `id` is opaque: new posts get a UUID, but any stored string is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "StoredPost")]
pub struct Post {
    pub id: String,
    pub title: String,
    pub body: String,
    pub category: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A post as read from the collection file. Older records may lack
/// `updatedAt`; those fall back to `createdAt`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredPost {
    id: String,
    title: String,
    body: String,
    category: String,
    author: String,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

impl From<StoredPost> for Post {
    fn from(stored: StoredPost) -> Self {
        let created_at = stored.created_at;
        Self {
            id: stored.id,
            title: stored.title,
            body: stored.body,
            category: stored.category,
            author: stored.author,
            created_at,
            updated_at: stored.updated_at.unwrap_or(created_at).max(created_at),
        }
    }
}

/// Fields supplied when creating a post. Absent or empty fields get defaults.
#[derive(Debug, Clone, Default)]
pub struct PostDraft {
    pub title: Option<String>,
    pub body: Option<String>,
    pub category: Option<String>,
    pub author: Option<String>,
}

/// Fields supplied when updating a post.
///
/// Only present, non-empty values replace what is stored, so a field cannot be
/// cleared through an update.
#[derive(Debug, Clone, Default)]
pub struct PostChanges {
    pub title: Option<String>,
    pub body: Option<String>,
    pub category: Option<String>,
    pub author: Option<String>,
}

impl Post {
    /// Create a new post from a draft with a fresh id and identical timestamps.
    pub fn new(draft: PostDraft) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            title: or_default(draft.title, DEFAULT_TITLE),
            body: or_default(draft.body, ""),
            category: or_default(draft.category, DEFAULT_CATEGORY),
            author: or_default(draft.author, DEFAULT_AUTHOR),
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply changes in place and refresh `updated_at`.
    ///
    /// `updated_at` never moves backwards, even if the clock does.
    pub fn apply(&mut self, changes: PostChanges) {
        replace_if_present(&mut self.title, changes.title);
        replace_if_present(&mut self.body, changes.body);
        replace_if_present(&mut self.category, changes.category);
        replace_if_present(&mut self.author, changes.author);
        self.updated_at = Utc::now().max(self.updated_at);
    }

    /// Case-insensitive substring match against title or body.
    ///
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.body.to_lowercase().contains(needle)
    }
}

/// Sort posts most recently updated first. Ties keep their stored order.
pub fn newest_first(posts: &mut [Post]) {
    posts.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
}

fn or_default(value: Option<String>, default: &str) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn replace_if_present(field: &mut String, value: Option<String>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        *field = value;
    }
}
