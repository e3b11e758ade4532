//! In-memory post store - the no-database fallback and the handler-test double.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use socktalk_core::domain::Post;
use socktalk_core::error::StoreError;
use socktalk_core::ports::PostStore;

/// `PostStore` over a `Vec` behind an async lock.
///
/// Honors the same contract as the PostgreSQL store: descending `created_at`
/// order, negative skip rejected, malformed identifiers reported as errors.
pub struct InMemoryPostStore {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(Vec::new()),
        }
    }

    pub fn with_posts(posts: Vec<Post>) -> Self {
        Self {
            posts: RwLock::new(posts),
        }
    }

    async fn sorted_desc(&self) -> Vec<Post> {
        let posts = self.posts.read().await;
        let mut sorted: Vec<Post> = posts.clone();
        sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        sorted
    }
}

impl Default for InMemoryPostStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn find_page(&self, skip: i64, limit: u64) -> Result<Vec<Post>, StoreError> {
        let offset = usize::try_from(skip)
            .map_err(|_| StoreError::Query(format!("skip must be non-negative, got {skip}")))?;

        Ok(self
            .sorted_desc()
            .await
            .into_iter()
            .skip(offset)
            .take(limit as usize)
            .collect())
    }

    async fn count(&self) -> Result<u64, StoreError> {
        Ok(self.posts.read().await.len() as u64)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Post>, StoreError> {
        let id = Uuid::parse_str(id).map_err(|e| StoreError::MalformedId(e.to_string()))?;

        Ok(self
            .posts
            .read()
            .await
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn search(&self, term: &str) -> Result<Vec<Post>, StoreError> {
        let needle = term.to_lowercase();

        Ok(self
            .sorted_desc()
            .await
            .into_iter()
            .filter(|p| {
                p.title.to_lowercase().contains(&needle)
                    || p.body.to_lowercase().contains(&needle)
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn seed(n: usize) -> Vec<Post> {
        // Oldest first so descending order differs from insertion order.
        (0..n)
            .map(|i| {
                let mut post = Post::new(format!("Post {i}"), format!("Body of post {i}"));
                post.created_at = Utc::now() - Duration::hours((n - i) as i64);
                post
            })
            .collect()
    }

    #[tokio::test]
    async fn pages_come_back_newest_first() {
        let store = InMemoryPostStore::with_posts(seed(15));

        let page = store.find_page(0, 10).await.unwrap();
        assert_eq!(page.len(), 10);
        assert_eq!(page[0].title, "Post 14");
        assert!(page.windows(2).all(|w| w[0].created_at >= w[1].created_at));

        let rest = store.find_page(10, 10).await.unwrap();
        assert_eq!(rest.len(), 5);
        assert_eq!(rest[4].title, "Post 0");
    }

    #[tokio::test]
    async fn negative_skip_is_a_query_error() {
        let store = InMemoryPostStore::with_posts(seed(3));
        let err = store.find_page(-10, 10).await.unwrap_err();
        assert!(matches!(err, StoreError::Query(_)));
    }

    #[tokio::test]
    async fn count_reports_all_posts() {
        let store = InMemoryPostStore::with_posts(seed(15));
        assert_eq!(store.count().await.unwrap(), 15);
        assert_eq!(InMemoryPostStore::new().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn find_by_id_roundtrips_and_misses_cleanly() {
        let posts = seed(2);
        let wanted = posts[1].clone();
        let store = InMemoryPostStore::with_posts(posts);

        let found = store.find_by_id(&wanted.id.to_string()).await.unwrap();
        assert_eq!(found.unwrap().title, wanted.title);

        let missing = store.find_by_id(&Uuid::new_v4().to_string()).await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn malformed_id_is_reported() {
        let store = InMemoryPostStore::new();
        let err = store.find_by_id("not-a-uuid").await.unwrap_err();
        assert!(matches!(err, StoreError::MalformedId(_)));
    }

    #[tokio::test]
    async fn search_matches_case_insensitively_across_fields() {
        let mut posts = seed(3);
        posts[0].body = "This mentions Script inside".to_string();
        posts[1].title = "SCRIPTING 101".to_string();
        let store = InMemoryPostStore::with_posts(posts);

        let hits = store.search("script").await.unwrap();
        assert_eq!(hits.len(), 2);
    }

    #[tokio::test]
    async fn search_with_no_matches_is_empty_not_an_error() {
        let store = InMemoryPostStore::with_posts(seed(3));
        assert!(store.search("zzzz").await.unwrap().is_empty());
    }
}
