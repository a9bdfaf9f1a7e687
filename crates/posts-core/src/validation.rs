//! Field validation for create and update requests.
//!
//! Checks run in a fixed order and stop at the first violation. Lengths are
//! measured in characters after trimming surrounding whitespace.

use crate::domain::{CreatePost, NewPost, PostChanges, PostStatus, UpdatePost};
use crate::error::{Field, ValidationError};

pub const TITLE_MIN_CHARS: usize = 20;
pub const CONTENT_MIN_CHARS: usize = 20;
pub const CATEGORY_MIN_CHARS: usize = 3;

/// Validate a create request.
///
/// Order: title required, title length, content required, content length,
/// category required, category length, status required, status value.
pub fn validate_create(req: CreatePost) -> Result<NewPost, ValidationError> {
    require(Field::Title, &req.title)?;
    min_length(Field::Title, &req.title, TITLE_MIN_CHARS)?;
    require(Field::Content, &req.content)?;
    min_length(Field::Content, &req.content, CONTENT_MIN_CHARS)?;
    require(Field::Category, &req.category)?;
    min_length(Field::Category, &req.category, CATEGORY_MIN_CHARS)?;
    require(Field::Status, &req.status)?;
    let status = parse_status(&req.status)?;

    Ok(NewPost {
        title: req.title,
        content: req.content,
        category: req.category,
        status,
    })
}

/// Validate a partial update. Blank fields are dropped, not checked.
pub fn validate_update(req: UpdatePost) -> Result<PostChanges, ValidationError> {
    let title = present(req.title);
    if let Some(title) = &title {
        min_length(Field::Title, title, TITLE_MIN_CHARS)?;
    }

    let content = present(req.content);
    if let Some(content) = &content {
        min_length(Field::Content, content, CONTENT_MIN_CHARS)?;
    }

    let category = present(req.category);
    if let Some(category) = &category {
        min_length(Field::Category, category, CATEGORY_MIN_CHARS)?;
    }

    let status = present(req.status)
        .map(|raw| parse_status(&raw))
        .transpose()?;

    Ok(PostChanges {
        title,
        content,
        category,
        status,
    })
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn require(field: Field, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required(field));
    }
    Ok(())
}

fn min_length(field: Field, value: &str, min: usize) -> Result<(), ValidationError> {
    if value.trim().chars().count() < min {
        return Err(ValidationError::TooShort { field, min });
    }
    Ok(())
}

fn parse_status(raw: &str) -> Result<PostStatus, ValidationError> {
    PostStatus::parse(raw).ok_or(ValidationError::InvalidStatus)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_create() -> CreatePost {
        CreatePost {
            title: "a".repeat(25),
            content: "b".repeat(25),
            category: "tech123".to_string(),
            status: "Publish".to_string(),
        }
    }

    fn reason(result: Result<impl std::fmt::Debug, ValidationError>) -> String {
        result.unwrap_err().to_string()
    }

    #[test]
    fn test_create_accepts_mixed_case_status() {
        let new_post = validate_create(valid_create()).unwrap();
        assert_eq!(new_post.status, PostStatus::Publish);
        assert_eq!(new_post.title, "a".repeat(25));
        assert_eq!(new_post.category, "tech123");
    }

    #[test]
    fn test_create_required_fields_in_order() {
        assert_eq!(
            reason(validate_create(CreatePost::default())),
            "title is required"
        );

        let req = CreatePost {
            content: "   ".to_string(),
            ..valid_create()
        };
        assert_eq!(reason(validate_create(req)), "content is required");

        let req = CreatePost {
            category: "\t\n".to_string(),
            ..valid_create()
        };
        assert_eq!(reason(validate_create(req)), "category is required");

        let req = CreatePost {
            status: " ".to_string(),
            ..valid_create()
        };
        assert_eq!(reason(validate_create(req)), "status is required");
    }

    #[test]
    fn test_create_title_length_checked_before_content_required() {
        let req = CreatePost {
            title: "too short".to_string(),
            content: String::new(),
            ..valid_create()
        };
        assert_eq!(
            reason(validate_create(req)),
            "title must be at least 20 characters"
        );
    }

    #[test]
    fn test_create_length_is_measured_after_trim() {
        let req = CreatePost {
            title: format!("   {}   ", "x".repeat(19)),
            ..valid_create()
        };
        assert_eq!(
            reason(validate_create(req)),
            "title must be at least 20 characters"
        );

        let req = CreatePost {
            content: format!("{}      ", "y".repeat(19)),
            ..valid_create()
        };
        assert_eq!(
            reason(validate_create(req)),
            "content must be at least 20 characters"
        );

        let req = CreatePost {
            category: " ab ".to_string(),
            ..valid_create()
        };
        assert_eq!(
            reason(validate_create(req)),
            "category must be at least 3 characters"
        );
    }

    #[test]
    fn test_create_minimum_lengths_are_inclusive() {
        let req = CreatePost {
            title: "t".repeat(20),
            content: "c".repeat(20),
            category: "abc".to_string(),
            status: "draft".to_string(),
        };
        assert!(validate_create(req).is_ok());
    }

    #[test]
    fn test_create_counts_characters_not_bytes() {
        let req = CreatePost {
            title: "é".repeat(15),
            ..valid_create()
        };
        assert_eq!(
            reason(validate_create(req)),
            "title must be at least 20 characters"
        );
    }

    #[test]
    fn test_create_rejects_unknown_status() {
        let req = CreatePost {
            status: "published".to_string(),
            ..valid_create()
        };
        assert_eq!(
            reason(validate_create(req)),
            "status must be 'publish', 'draft', or 'trash'"
        );
    }

    #[test]
    fn test_update_blank_fields_mean_unchanged() {
        let changes = validate_update(UpdatePost {
            title: Some(String::new()),
            content: Some("c".repeat(30)),
            category: Some("   ".to_string()),
            status: None,
        })
        .unwrap();

        assert_eq!(
            changes,
            PostChanges {
                content: Some("c".repeat(30)),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_update_empty_request_is_valid() {
        let changes = validate_update(UpdatePost {
            title: Some("   ".to_string()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(changes, PostChanges::default());
    }

    #[test]
    fn test_update_checks_present_fields_in_order() {
        let req = UpdatePost {
            title: Some("short".to_string()),
            status: Some("bogus".to_string()),
            ..Default::default()
        };
        assert_eq!(
            reason(validate_update(req)),
            "title must be at least 20 characters"
        );

        let req = UpdatePost {
            content: Some("short".to_string()),
            category: Some("x".to_string()),
            ..Default::default()
        };
        assert_eq!(
            reason(validate_update(req)),
            "content must be at least 20 characters"
        );

        let req = UpdatePost {
            category: Some("x".to_string()),
            status: Some("bogus".to_string()),
            ..Default::default()
        };
        assert_eq!(
            reason(validate_update(req)),
            "category must be at least 3 characters"
        );

        let req = UpdatePost {
            status: Some("bogus".to_string()),
            ..Default::default()
        };
        assert_eq!(
            reason(validate_update(req)),
            "status must be 'publish', 'draft', or 'trash'"
        );
    }

    #[test]
    fn test_update_normalizes_status() {
        let changes = validate_update(UpdatePost {
            status: Some(" TRASH ".to_string()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(changes.status, Some(PostStatus::Trash));
    }
}
