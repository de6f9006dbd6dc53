use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{Post, PostDraft};
use crate::error::RepoError;

/// Generic key-value repository: one record per key, one store call per operation.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync
where
    ID: ?Sized,
{
    /// Scan every record. Order is whatever the store returns.
    async fn find_all(&self) -> Result<Vec<T>, RepoError>;

    /// Find a record by its key.
    async fn find_by_id(&self, id: &ID) -> Result<Option<T>, RepoError>;

    /// Put a record, overwriting any record with the same key.
    async fn save(&self, entity: T) -> Result<T, RepoError>;

    /// Delete a record by its key. Deleting a missing key succeeds.
    async fn delete(&self, id: &ID) -> Result<(), RepoError>;
}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, str> {
    /// Rewrite the writable fields of an existing post and return its post-write state.
    ///
    /// Returns [`RepoError::NotFound`] when no post has this id; never creates one.
    async fn update(
        &self,
        id: &str,
        draft: PostDraft,
        updated_at: DateTime<Utc>,
    ) -> Result<Post, RepoError>;
}
