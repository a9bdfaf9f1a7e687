//! The uniform response envelope used by every endpoint.

use posts_core::domain::{Post, PostPage};
use serde::{Deserialize, Serialize};

/// Payloads an envelope can carry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseData {
    Post(Post),
    Page(PostPage),
}

impl From<Post> for ResponseData {
    fn from(post: Post) -> Self {
        ResponseData::Post(post)
    }
}

impl From<PostPage> for ResponseData {
    fn from(page: PostPage) -> Self {
        ResponseData::Page(page)
    }
}

/// Standard API response wrapper for both successes and failures.
///
/// `data` and `error` are omitted from the JSON when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<ResponseData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiResponse {
    pub fn ok(message: impl Into<String>, data: impl Into<ResponseData>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data.into()),
            error: None,
        }
    }

    /// Success without a payload, e.g. after a delete.
    pub fn ok_empty(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: None,
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
            error: None,
        }
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use posts_core::domain::PostStatus;
    use serde_json::json;

    fn post() -> Post {
        let now = Utc::now();
        Post {
            id: 1,
            title: "Envelope title long enough".to_string(),
            content: "Envelope content long enough".to_string(),
            category: "misc".to_string(),
            status: PostStatus::Publish,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_failure_omits_data() {
        let value = serde_json::to_value(
            ApiResponse::failure("Validation error").with_error("title is required"),
        )
        .unwrap();

        assert_eq!(
            value,
            json!({
                "success": false,
                "message": "Validation error",
                "error": "title is required",
            })
        );
    }

    #[test]
    fn test_empty_success_has_only_flag_and_message() {
        let value = serde_json::to_value(ApiResponse::ok_empty("Post deleted successfully")).unwrap();
        assert_eq!(
            value,
            json!({ "success": true, "message": "Post deleted successfully" })
        );
    }

    #[test]
    fn test_post_payload_is_inlined() {
        let value = serde_json::to_value(ApiResponse::ok("Post fetched successfully", post())).unwrap();
        assert_eq!(value["data"]["id"], 1);
        assert_eq!(value["data"]["status"], "publish");
        assert!(value.get("error").is_none());
    }

    #[test]
    fn test_page_payload_round_trips_as_page() {
        let page = PostPage {
            data: vec![post()],
            limit: 10,
            offset: 0,
            total_count: 1,
        };
        let json = serde_json::to_string(&ApiResponse::ok("Posts fetched successfully", page.clone()))
            .unwrap();

        let parsed: ApiResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.data, Some(ResponseData::Page(page)));
    }
}
