use async_trait::async_trait;

use crate::domain::{NewPost, Post, PostChanges, PostId, PostPage};
use crate::error::RepoError;

/// Post persistence.
///
/// Absence is not an error: lookups return `None` and `delete` returns
/// `false` when no row matched.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Insert a post. The store assigns the id; both timestamps are set to now.
    async fn create(&self, post: NewPost) -> Result<Post, RepoError>;

    /// Find a post by its id.
    async fn get_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError>;

    /// Fetch `limit` posts starting at `offset`, newest `created_at` first,
    /// together with the total number of posts.
    async fn get_all(&self, limit: u64, offset: u64) -> Result<PostPage, RepoError>;

    /// Apply `changes` to an existing post and bump `updated_at`.
    ///
    /// Read-then-write: concurrent updates to the same id are last-writer-wins.
    async fn update(&self, id: PostId, changes: PostChanges) -> Result<Option<Post>, RepoError>;

    /// Delete a post. Returns `false` if no row was affected.
    async fn delete(&self, id: PostId) -> Result<bool, RepoError>;
}
