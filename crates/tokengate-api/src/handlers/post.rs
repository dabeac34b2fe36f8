//! Post handlers. Every route acts on the caller's own posts only.

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use tokengate_core::error::AppError;
use tokengate_core::types::PageResponse;

use crate::dto::request::{CreatePostRequest, UpdatePostRequest};
use crate::dto::response::{ApiResponse, MessageResponse, PostResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, PaginationParams, ValidatedJson, parse_post_id};
use crate::state::AppState;

/// POST /api/v1/posts/create
pub async fn create_post(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<CreatePostRequest>,
) -> Result<(StatusCode, Json<ApiResponse<PostResponse>>), ApiError> {
    let post = state.posts.create(auth.user_id, req.into()).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(post.into()))))
}

/// GET /api/v1/posts
pub async fn list_posts(
    State(state): State<AppState>,
    auth: AuthUser,
    params: Result<Query<PaginationParams>, QueryRejection>,
) -> Result<Json<ApiResponse<PageResponse<PostResponse>>>, ApiError> {
    let Query(params) = params.map_err(|rejection| {
        tracing::debug!(error = %rejection.body_text(), "Rejected query string");
        AppError::validation("Invalid pagination parameters")
    })?;

    let page = state
        .posts
        .list(auth.user_id, params.into_page_request())
        .await?;
    Ok(Json(ApiResponse::ok(page.map(PostResponse::from))))
}

/// GET /api/v1/posts/{id}
pub async fn get_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<PostResponse>>, ApiError> {
    let post = state.posts.get(auth.user_id, parse_post_id(&id)?).await?;
    Ok(Json(ApiResponse::ok(post.into())))
}

/// PATCH /api/v1/posts/{id}/update
pub async fn update_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<UpdatePostRequest>,
) -> Result<Json<ApiResponse<PostResponse>>, ApiError> {
    let post = state
        .posts
        .update(auth.user_id, parse_post_id(&id)?, req.into())
        .await?;
    Ok(Json(ApiResponse::ok(post.into())))
}

/// DELETE /api/v1/posts/{id}/delete
pub async fn delete_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.posts.delete(auth.user_id, parse_post_id(&id)?).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "Post deleted successfully",
    ))))
}
