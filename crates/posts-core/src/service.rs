//! The validate-then-persist pipeline behind every post endpoint.

use std::sync::Arc;

use tracing::instrument;

use crate::domain::{CreatePost, Post, PostId, PostPage, UpdatePost};
use crate::error::{PostError, PostResult};
use crate::ports::PostRepository;
use crate::validation;

/// Service layer for post business logic.
///
/// Validation runs before any repository call; a rejected request never
/// reaches the store.
#[derive(Clone)]
pub struct PostService {
    repository: Arc<dyn PostRepository>,
}

impl PostService {
    pub fn new(repository: Arc<dyn PostRepository>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self, input))]
    pub async fn create_post(&self, input: CreatePost) -> PostResult<Post> {
        let new_post = validation::validate_create(input)?;
        Ok(self.repository.create(new_post).await?)
    }

    #[instrument(skip(self), fields(post_id = %id))]
    pub async fn get_post(&self, id: PostId) -> PostResult<Post> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(PostError::NotFound(id))
    }

    #[instrument(skip(self))]
    pub async fn list_posts(&self, limit: u64, offset: u64) -> PostResult<PostPage> {
        Ok(self.repository.get_all(limit, offset).await?)
    }

    #[instrument(skip(self, input), fields(post_id = %id))]
    pub async fn update_post(&self, id: PostId, input: UpdatePost) -> PostResult<Post> {
        let changes = validation::validate_update(input)?;
        self.repository
            .update(id, changes)
            .await?
            .ok_or(PostError::NotFound(id))
    }

    #[instrument(skip(self), fields(post_id = %id))]
    pub async fn delete_post(&self, id: PostId) -> PostResult<()> {
        if !self.repository.delete(id).await? {
            return Err(PostError::NotFound(id));
        }
        Ok(())
    }
}
