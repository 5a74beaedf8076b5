//! In-memory post store - used by tests and for ephemeral runs.

use async_trait::async_trait;
use tokio::sync::RwLock;

use pressroom_core::RepoError;
use pressroom_core::domain::{Post, PostChanges, PostDraft};
use pressroom_core::ports::PostRepository;

/// In-memory post store using a Vec behind an async RwLock.
///
/// Mirrors the file store's semantics without touching disk.
/// Note: Data is lost on process restart.
pub struct InMemoryPostStore {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(Vec::new()),
        }
    }

    /// Seed the store with an existing collection.
    pub fn with_posts(posts: Vec<Post>) -> Self {
        Self {
            posts: RwLock::new(posts),
        }
    }
}

impl Default for InMemoryPostStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostStore {
    async fn load(&self) -> Result<Vec<Post>, RepoError> {
        Ok(self.posts.read().await.clone())
    }

    async fn create(&self, draft: PostDraft) -> Result<Post, RepoError> {
        let post = Post::new(draft);
        self.posts.write().await.push(post.clone());
        Ok(post)
    }

    async fn update(&self, id: &str, changes: PostChanges) -> Result<Post, RepoError> {
        let mut posts = self.posts.write().await;
        let post = posts
            .iter_mut()
            .find(|post| post.id == id)
            .ok_or_else(|| RepoError::NotFound(id.to_string()))?;

        post.apply(changes);
        Ok(post.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), RepoError> {
        self.posts.write().await.retain(|post| post.id != id);
        Ok(())
    }
}
