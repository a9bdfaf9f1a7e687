//! Domain-level error types.

use std::fmt;

use thiserror::Error;

use crate::domain::PostId;

/// A post field subject to validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Content,
    Category,
    Status,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Title => "title",
            Field::Content => "content",
            Field::Category => "category",
            Field::Status => "status",
        };
        f.write_str(name)
    }
}

/// Business-rule violations. The `Display` text is the reason reported to clients.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(Field),

    #[error("{field} must be at least {min} characters")]
    TooShort { field: Field, min: usize },

    #[error("status must be 'publish', 'draft', or 'trash'")]
    InvalidStatus,
}

/// Repository-level errors. Every variant is a persistence failure.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Constraint violation: {0}")]
    Constraint(String),
}

/// Outcome of a post operation that did not succeed.
#[derive(Debug, Error)]
pub enum PostError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Post {0} not found")]
    NotFound(PostId),

    #[error(transparent)]
    Persistence(#[from] RepoError),
}

pub type PostResult<T> = Result<T, PostError>;
