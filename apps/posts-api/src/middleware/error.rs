//! Error handling - every failed outcome becomes a status code plus envelope.

use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use posts_core::PostError;
use posts_shared::ApiResponse;
use thiserror::Error;

/// Application-level error type that converts to enveloped responses.
#[derive(Debug, Error)]
pub enum AppError {
    /// The request body could not be decoded.
    #[error("Invalid request body: {0}")]
    MalformedInput(String),

    /// A path parameter failed to parse or was out of range.
    #[error("{message}: {reason}")]
    InvalidParam {
        message: &'static str,
        reason: String,
    },

    /// The path id is a positive integer too large to name a stored post.
    #[error("Post {0} not found")]
    UnknownPostId(String),

    /// No route matches the request path and method.
    #[error("Not found")]
    RouteNotFound,

    /// A post operation failed; `action` is the message used for
    /// persistence failures.
    #[error("{action}: {source}")]
    Post {
        action: &'static str,
        #[source]
        source: PostError,
    },
}

impl AppError {
    pub fn invalid_param(message: &'static str, reason: impl Into<String>) -> Self {
        AppError::InvalidParam {
            message,
            reason: reason.into(),
        }
    }

    /// Wrap a post error with the message to report if it is a persistence failure.
    pub fn post(action: &'static str) -> impl FnOnce(PostError) -> Self {
        move |source| AppError::Post { action, source }
    }

    fn envelope(&self) -> ApiResponse {
        match self {
            AppError::MalformedInput(reason) => {
                ApiResponse::failure("Invalid request body").with_error(reason.as_str())
            }
            AppError::InvalidParam { message, reason } => {
                ApiResponse::failure(*message).with_error(reason.as_str())
            }
            AppError::UnknownPostId(_)
            | AppError::Post {
                source: PostError::NotFound(_),
                ..
            } => ApiResponse::failure("Post not found"),
            AppError::RouteNotFound => ApiResponse::failure("Not found"),
            AppError::Post {
                source: PostError::Validation(reason),
                ..
            } => ApiResponse::failure("Validation error").with_error(reason.to_string()),
            AppError::Post { action, source } => {
                ApiResponse::failure(*action).with_error(source.to_string())
            }
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::MalformedInput(_) | AppError::InvalidParam { .. } => StatusCode::BAD_REQUEST,
            AppError::UnknownPostId(_) | AppError::RouteNotFound => StatusCode::NOT_FOUND,
            AppError::Post { source, .. } => match source {
                PostError::Validation(_) => StatusCode::BAD_REQUEST,
                PostError::NotFound(_) => StatusCode::NOT_FOUND,
                PostError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let AppError::Post {
            action,
            source: PostError::Persistence(err),
        } = self
        {
            tracing::error!(error = %err, "{}", action);
        }

        HttpResponse::build(self.status_code()).json(self.envelope())
    }
}

/// Turns JSON extractor failures into a malformed-input envelope.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::MalformedInput(err.to_string()).into()
}

/// Fallback for requests no route matches.
pub async fn route_not_found() -> AppResult<HttpResponse> {
    Err(AppError::RouteNotFound)
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
