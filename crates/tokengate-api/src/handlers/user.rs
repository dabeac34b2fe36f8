//! Handlers for the authenticated user's own account.

use axum::Json;
use axum::extract::State;

use crate::dto::request::{UpdatePasswordRequest, UpdateUserRequest};
use crate::dto::response::{ApiResponse, MessageResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, ValidatedJson};
use crate::state::AppState;

/// GET /api/v1/session
pub async fn session(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user = state.accounts.profile(auth.user_id).await?;
    Ok(Json(ApiResponse::ok(user.into())))
}

/// PATCH /api/v1/user
pub async fn update_user(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<UpdateUserRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user = state
        .accounts
        .update_profile(auth.user_id, &req.into())
        .await?;
    Ok(Json(ApiResponse::ok(user.into())))
}

/// PATCH /api/v1/user/update_password
///
/// The token used for this request is revoked on success; other sessions
/// of the same user stay live.
pub async fn update_password(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<UpdatePasswordRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state
        .accounts
        .change_password(&auth, &req.current_password, &req.new_password)
        .await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "Password updated successfully",
    ))))
}

/// DELETE /api/v1/user
pub async fn delete_user(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.accounts.delete_account(&auth).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "User deleted successfully",
    ))))
}
