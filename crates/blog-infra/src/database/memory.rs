//! In-memory record store - used when no database is configured.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use blog_core::domain::{Post, PostDraft};
use blog_core::error::RepoError;
use blog_core::ports::{BaseRepository, PostRepository};

/// In-memory post table using a HashMap keyed by post id behind an async RwLock.
///
/// Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    table: String,
    store: RwLock<HashMap<String, Post>>,
}

impl InMemoryPostRepository {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            store: RwLock::new(HashMap::new()),
        }
    }

    pub fn table_name(&self) -> &str {
        &self.table
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new("posts")
    }
}

#[async_trait]
impl BaseRepository<Post, str> for InMemoryPostRepository {
    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.values().cloned().collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.get(id).cloned())
    }

    async fn save(&self, post: Post) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;
        store.insert(post.id.clone(), post.clone());
        tracing::debug!(table = %self.table, post_id = %post.id, "Stored post");
        Ok(post)
    }

    async fn delete(&self, id: &str) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        if store.remove(id).is_none() {
            tracing::debug!(table = %self.table, post_id = %id, "Delete of missing post");
        }
        Ok(())
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn update(
        &self,
        id: &str,
        draft: PostDraft,
        updated_at: DateTime<Utc>,
    ) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;
        let post = store.get_mut(id).ok_or(RepoError::NotFound)?;
        post.apply(draft, updated_at);
        Ok(post.clone())
    }
}
