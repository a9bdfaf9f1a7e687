//! SQL post repository on SeaORM.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryOrder,
    QuerySelect, SqlErr,
};

use posts_core::domain::{NewPost, Post, PostChanges, PostId, PostPage};
use posts_core::error::RepoError;
use posts_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};

/// Post repository backed by a pooled SeaORM connection.
pub struct SqlPostRepository {
    db: DatabaseConnection,
}

impl SqlPostRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    #[cfg(test)]
    pub(crate) fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    async fn find_model(&self, id: PostId) -> Result<Option<post::Model>, RepoError> {
        PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)
    }
}

fn map_db_err(err: DbErr) -> RepoError {
    if let Some(SqlErr::UniqueConstraintViolation(detail)) = err.sql_err() {
        return RepoError::Constraint(detail);
    }
    match err {
        DbErr::ConnectionAcquire(_) | DbErr::Conn(_) => RepoError::Connection(err.to_string()),
        _ => RepoError::Query(err.to_string()),
    }
}

#[async_trait]
impl PostRepository for SqlPostRepository {
    async fn create(&self, new_post: NewPost) -> Result<Post, RepoError> {
        let now = Utc::now();
        let model = post::ActiveModel {
            id: NotSet,
            title: Set(new_post.title),
            content: Set(new_post.content),
            category: Set(new_post.category),
            status: Set(new_post.status.as_str().to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.db)
        .await
        .map_err(map_db_err)?;

        tracing::info!(post_id = model.id, "Created post");
        model.try_into()
    }

    async fn get_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError> {
        self.find_model(id).await?.map(Post::try_from).transpose()
    }

    async fn get_all(&self, limit: u64, offset: u64) -> Result<PostPage, RepoError> {
        let total_count = PostEntity::find()
            .count(&self.db)
            .await
            .map_err(map_db_err)?;

        let models = PostEntity::find()
            .order_by_desc(post::Column::CreatedAt)
            .order_by_desc(post::Column::Id)
            .limit(limit)
            .offset(offset)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        let data = models
            .into_iter()
            .map(Post::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PostPage {
            data,
            limit,
            offset,
            total_count,
        })
    }

    async fn update(&self, id: PostId, changes: PostChanges) -> Result<Option<Post>, RepoError> {
        let Some(model) = self.find_model(id).await? else {
            return Ok(None);
        };

        let mut current = Post::try_from(model)?;
        current.apply(changes, Utc::now());

        let active = post::ActiveModel {
            id: Unchanged(current.id),
            title: Set(current.title),
            content: Set(current.content),
            category: Set(current.category),
            status: Set(current.status.as_str().to_string()),
            created_at: Unchanged(current.created_at),
            updated_at: Set(current.updated_at),
        };

        match active.update(&self.db).await {
            Ok(updated) => {
                tracing::info!(post_id = id, "Updated post");
                Post::try_from(updated).map(Some)
            }
            // Zero affected rows: either the row vanished after the read or
            // the store saw nothing to change. Re-read to tell which.
            Err(DbErr::RecordNotUpdated) => self.get_by_id(id).await,
            Err(e) => Err(map_db_err(e)),
        }
    }

    async fn delete(&self, id: PostId) -> Result<bool, RepoError> {
        let result = PostEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Ok(false);
        }

        tracing::info!(post_id = id, "Deleted post");
        Ok(true)
    }
}
