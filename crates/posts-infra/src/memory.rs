//! In-memory post repository, used by the handler tests.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use posts_core::domain::{NewPost, Post, PostChanges, PostId, PostPage};
use posts_core::error::RepoError;
use posts_core::ports::PostRepository;

#[derive(Default)]
struct Store {
    last_id: PostId,
    posts: BTreeMap<PostId, Post>,
}

/// In-memory post repository using a BTreeMap behind an async RwLock.
///
/// Ids are assigned sequentially from 1 and never reused.
/// Note: Data is lost on process restart.
#[derive(Default)]
pub struct InMemoryPostRepository {
    store: RwLock<Store>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn create(&self, new_post: NewPost) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;
        store.last_id += 1;

        let now = Utc::now();
        let post = Post {
            id: store.last_id,
            title: new_post.title,
            content: new_post.content,
            category: new_post.category,
            status: new_post.status,
            created_at: now,
            updated_at: now,
        };
        store.posts.insert(post.id, post.clone());

        Ok(post)
    }

    async fn get_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.posts.get(&id).cloned())
    }

    async fn get_all(&self, limit: u64, offset: u64) -> Result<PostPage, RepoError> {
        let store = self.store.read().await;

        let mut posts: Vec<&Post> = store.posts.values().collect();
        posts.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });

        let skip = usize::try_from(offset).unwrap_or(usize::MAX);
        let take = usize::try_from(limit).unwrap_or(usize::MAX);
        let data = posts.into_iter().skip(skip).take(take).cloned().collect();

        Ok(PostPage {
            data,
            limit,
            offset,
            total_count: store.posts.len() as u64,
        })
    }

    async fn update(&self, id: PostId, changes: PostChanges) -> Result<Option<Post>, RepoError> {
        let mut store = self.store.write().await;
        let Some(post) = store.posts.get_mut(&id) else {
            return Ok(None);
        };

        post.apply(changes, Utc::now());
        Ok(Some(post.clone()))
    }

    async fn delete(&self, id: PostId) -> Result<bool, RepoError> {
        let mut store = self.store.write().await;
        Ok(store.posts.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use posts_core::domain::PostStatus;

    fn new_post(n: usize) -> NewPost {
        NewPost {
            title: format!("In-memory post title number {n}"),
            content: format!("In-memory post content number {n}"),
            category: "memo".to_string(),
            status: PostStatus::Draft,
        }
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let repo = InMemoryPostRepository::new();
        let first = repo.create(new_post(1)).await.unwrap();
        assert!(repo.delete(first.id).await.unwrap());

        let second = repo.create(new_post(2)).await.unwrap();
        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn test_offset_past_end_returns_empty_page() {
        let repo = InMemoryPostRepository::new();
        for n in 0..3 {
            repo.create(new_post(n)).await.unwrap();
        }

        let page = repo.get_all(10, 5).await.unwrap();
        assert!(page.data.is_empty());
        assert_eq!(page.total_count, 3);
    }

    #[tokio::test]
    async fn test_pagination_newest_first() {
        let repo = InMemoryPostRepository::new();
        for n in 0..5 {
            repo.create(new_post(n)).await.unwrap();
        }

        let page = repo.get_all(2, 0).await.unwrap();
        let ids: Vec<PostId> = page.data.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![5, 4]);
        assert_eq!(page.total_count, 5);
    }
}
