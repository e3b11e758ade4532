use async_trait::async_trait;

use crate::domain::Post;
use crate::error::StoreError;

/// Read-side port over the post store.
///
/// The listing contract is descending `created_at` order with ties broken by
/// whatever the backing store provides. `skip` is signed: the listing handler
/// forwards its offset arithmetic unvalidated, and a negative skip is a store
/// error, not a clamped zero.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Fetch one page of posts, newest first.
    async fn find_page(&self, skip: i64, limit: u64) -> Result<Vec<Post>, StoreError>;

    /// Total number of stored posts.
    async fn count(&self) -> Result<u64, StoreError>;

    /// Find a post by its store-native identifier (UUID text).
    ///
    /// Returns `Ok(None)` when no such post exists and
    /// `Err(StoreError::MalformedId)` when the identifier does not parse.
    async fn find_by_id(&self, id: &str) -> Result<Option<Post>, StoreError>;

    /// Posts whose title or body contains `term` case-insensitively.
    /// The caller is responsible for sanitizing the term first.
    async fn search(&self, term: &str) -> Result<Vec<Post>, StoreError>;
}
