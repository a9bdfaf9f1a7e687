//! Post entity for SeaORM.

use sea_orm::entity::prelude::*;

use posts_core::domain::{Post, PostStatus};
use posts_core::error::RepoError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub category: String,
    pub status: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Post.
///
/// Fails if the row holds a status outside the known set.
impl TryFrom<Model> for Post {
    type Error = RepoError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let status = PostStatus::parse(&model.status).ok_or_else(|| {
            RepoError::Query(format!(
                "post {} has unknown status '{}'",
                model.id, model.status
            ))
        })?;

        Ok(Self {
            id: model.id,
            title: model.title,
            content: model.content,
            category: model.category,
            status,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
