use async_trait::async_trait;

use crate::domain::{Post, PostChanges, PostDraft};
use crate::error::RepoError;

/// Post store - sole authority over the post collection.
///
/// Implementations hold no cache: every call reads the whole collection and
/// every mutation writes the whole collection back. Query methods are
/// provided on top of [`PostRepository::load`] so all stores share them.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Read the entire collection in stored order.
    async fn load(&self) -> Result<Vec<Post>, RepoError>;

    /// Create a post from a draft, append it, and persist.
    async fn create(&self, draft: PostDraft) -> Result<Post, RepoError>;

    /// Apply changes to the post with `id` and persist.
    ///
    /// Returns [`RepoError::NotFound`] if no post has that id.
    async fn update(&self, id: &str, changes: PostChanges) -> Result<Post, RepoError>;

    /// Remove the post with `id` and persist. Absent ids are a no-op.
    async fn delete(&self, id: &str) -> Result<(), RepoError>;

    /// Posts whose category equals `name` exactly.
    async fn filter_by_category(&self, name: &str) -> Result<Vec<Post>, RepoError> {
        let mut posts = self.load().await?;
        posts.retain(|post| post.category == name);
        Ok(posts)
    }

    /// Find a post by its id.
    async fn find_by_id(&self, id: &str) -> Result<Option<Post>, RepoError> {
        let posts = self.load().await?;
        Ok(posts.into_iter().find(|post| post.id == id))
    }

    /// Posts whose title or body contains `query`, ignoring case.
    /// An empty query matches every post.
    async fn search(&self, query: &str) -> Result<Vec<Post>, RepoError> {
        let needle = query.to_lowercase();
        let mut posts = self.load().await?;
        posts.retain(|post| post.matches(&needle));
        Ok(posts)
    }
}
