//! Post CRUD handlers.

use std::num::IntErrorKind;

use actix_web::{HttpResponse, web};

use posts_core::domain::{CreatePost, PostId, UpdatePost};
use posts_shared::ApiResponse;

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Positive ids past `PostId::MAX` cannot exist in the store and read as not found.
fn parse_id(raw: &str) -> AppResult<PostId> {
    match raw.parse::<PostId>() {
        Ok(id) if id > 0 => Ok(id),
        Ok(_) => Err(AppError::invalid_param(
            "Invalid post ID",
            "id must be a positive integer",
        )),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => {
            Err(AppError::UnknownPostId(raw.to_owned()))
        }
        Err(e) => Err(AppError::invalid_param("Invalid post ID", e.to_string())),
    }
}

fn parse_limit(raw: &str) -> AppResult<u64> {
    raw.parse::<u64>()
        .ok()
        .filter(|limit| *limit > 0)
        .ok_or_else(|| {
            AppError::invalid_param("Invalid limit parameter", "limit must be a positive integer")
        })
}

fn parse_offset(raw: &str) -> AppResult<u64> {
    raw.parse::<u64>().map_err(|_| {
        AppError::invalid_param(
            "Invalid offset parameter",
            "offset must be a non-negative integer",
        )
    })
}

/// POST /posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePost>,
) -> AppResult<HttpResponse> {
    let post = state
        .posts
        .create_post(body.into_inner())
        .await
        .map_err(AppError::post("Failed to create post"))?;

    Ok(HttpResponse::Created().json(ApiResponse::ok("Post created successfully", post)))
}

/// GET /posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    let post = state
        .posts
        .get_post(id)
        .await
        .map_err(AppError::post("Failed to fetch post"))?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok("Post fetched successfully", post)))
}

/// GET /articles/{limit}/{offset}
pub async fn list_posts(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> AppResult<HttpResponse> {
    let (limit, offset) = path.into_inner();
    let limit = parse_limit(&limit)?;
    let offset = parse_offset(&offset)?;

    let page = state
        .posts
        .list_posts(limit, offset)
        .await
        .map_err(AppError::post("Failed to fetch posts"))?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok("Posts fetched successfully", page)))
}

/// PUT /posts/{id}
///
/// The id is checked before the body is decoded.
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Bytes,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    let changes: UpdatePost = serde_json::from_slice(&body)
        .map_err(|e| AppError::MalformedInput(e.to_string()))?;

    let post = state
        .posts
        .update_post(id, changes)
        .await
        .map_err(AppError::post("Failed to update post"))?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok("Post updated successfully", post)))
}

/// DELETE /posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    state
        .posts
        .delete_post(id)
        .await
        .map_err(AppError::post("Failed to delete post"))?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok_empty("Post deleted successfully")))
}
