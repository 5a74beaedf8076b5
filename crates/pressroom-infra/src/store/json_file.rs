//! JSON file post store.
//!
//! The whole collection lives in one pretty-printed JSON array. There is no
//! index and no cache: every read parses the full file and every mutation
//! rewrites it, so each operation costs O(n) in the number of posts.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use pressroom_core::RepoError;
use pressroom_core::domain::{Post, PostChanges, PostDraft};
use pressroom_core::ports::PostRepository;

use super::config::{ReadErrorPolicy, StoreConfig};

/// Post store backed by a single JSON file.
///
/// The lock serializes read-modify-write cycles within this process only.
/// Another process writing the same file still races last-writer-wins.
pub struct JsonFilePostStore {
    path: PathBuf,
    on_read_error: ReadErrorPolicy,
    lock: RwLock<()>,
}

impl JsonFilePostStore {
    /// Open the store, creating the file as an empty collection if absent.
    pub async fn open(config: StoreConfig) -> Result<Self, RepoError> {
        let path = config.path;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| RepoError::Write(e.to_string()))?;
        }

        let exists = fs::try_exists(&path)
            .await
            .map_err(|e| RepoError::Read(e.to_string()))?;
        if !exists {
            fs::write(&path, "[]")
                .await
                .map_err(|e| RepoError::Write(e.to_string()))?;
            info!(path = %path.display(), "Initialized empty post collection");
        }

        info!(
            path = %path.display(),
            on_read_error = ?config.on_read_error,
            "Opened post store"
        );

        Ok(Self {
            path,
            on_read_error: config.on_read_error,
            lock: RwLock::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Wait for in-flight mutations to finish. Writes are never buffered, so
    /// nothing remains to flush afterwards.
    pub async fn close(&self) {
        let _guard = self.lock.write().await;
        info!(path = %self.path.display(), "Closed post store");
    }

    async fn read_all(&self) -> Result<Vec<Post>, RepoError> {
        let parsed = match fs::read_to_string(&self.path).await {
            Ok(raw) => serde_json::from_str::<Vec<Post>>(&raw).map_err(|e| e.to_string()),
            Err(e) => Err(e.to_string()),
        };

        match parsed {
            Ok(posts) => Ok(posts),
            Err(reason) => match self.on_read_error {
                ReadErrorPolicy::EmptyCollection => {
                    warn!(
                        path = %self.path.display(),
                        error = %reason,
                        "Post collection unreadable, treating as empty"
                    );
                    Ok(Vec::new())
                }
                ReadErrorPolicy::Fail => Err(RepoError::Read(reason)),
            },
        }
    }

    async fn write_all(&self, posts: &[Post]) -> Result<(), RepoError> {
        let json =
            serde_json::to_string_pretty(posts).map_err(|e| RepoError::Write(e.to_string()))?;

        fs::write(&self.path, json)
            .await
            .map_err(|e| RepoError::Write(e.to_string()))?;

        debug!(path = %self.path.display(), count = posts.len(), "Wrote post collection");
        Ok(())
    }
}

#[async_trait]
impl PostRepository for JsonFilePostStore {
    async fn load(&self) -> Result<Vec<Post>, RepoError> {
        let _guard = self.lock.read().await;
        self.read_all().await
    }

    async fn create(&self, draft: PostDraft) -> Result<Post, RepoError> {
        let _guard = self.lock.write().await;
        let mut posts = self.read_all().await?;

        let post = Post::new(draft);
        posts.push(post.clone());
        self.write_all(&posts).await?;

        info!(post_id = %post.id, category = %post.category, "Created post");
        Ok(post)
    }

    async fn update(&self, id: &str, changes: PostChanges) -> Result<Post, RepoError> {
        let _guard = self.lock.write().await;
        let mut posts = self.read_all().await?;

        let post = posts
            .iter_mut()
            .find(|post| post.id == id)
            .ok_or_else(|| RepoError::NotFound(id.to_string()))?;
        post.apply(changes);
        let updated = post.clone();

        self.write_all(&posts).await?;

        info!(post_id = %id, "Updated post");
        Ok(updated)
    }

    async fn delete(&self, id: &str) -> Result<(), RepoError> {
        let _guard = self.lock.write().await;
        let mut posts = self.read_all().await?;

        let before = posts.len();
        posts.retain(|post| post.id != id);
        let removed = posts.len() != before;

        self.write_all(&posts).await?;

        if removed {
            info!(post_id = %id, "Deleted post");
        } else {
            debug!(post_id = %id, "Delete of unknown post is a no-op");
        }
        Ok(())
    }
}
