//! Auth handlers: signup, login, logout.

use axum::Json;
use axum::extract::State;
use axum::http::header::AUTHORIZATION;
use axum::http::{HeaderMap, StatusCode};
use axum_extra::extract::cookie::{Cookie, CookieJar};

use tokengate_auth::session::bearer_token;

use crate::dto::request::{LoginRequest, SignupRequest};
use crate::dto::response::{ApiResponse, MessageResponse, TokenResponse};
use crate::error::ApiError;
use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// Cookie that may carry a session token alongside the header.
pub const SESSION_COOKIE: &str = "session";

/// POST /api/v1/user/signup
pub async fn signup(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<SignupRequest>,
) -> Result<(StatusCode, Json<ApiResponse<TokenResponse>>), ApiError> {
    let issued = state.accounts.signup(req.into()).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(issued.into())),
    ))
}

/// POST /api/v1/user/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> Result<Json<ApiResponse<TokenResponse>>, ApiError> {
    let issued = state.accounts.login(&req.email, &req.password).await?;
    Ok(Json(ApiResponse::ok(issued.into())))
}

/// POST /api/v1/user/logout
///
/// Unauthenticated: revokes whatever token the header and the `session`
/// cookie carry, clears the cookie, and always reports success.
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
    jar: CookieJar,
) -> (CookieJar, Json<ApiResponse<MessageResponse>>) {
    let header_token = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(bearer_token);
    let cookie_token = jar
        .get(SESSION_COOKIE)
        .map(|c| c.value().to_string())
        .filter(|v| !v.is_empty());

    let tokens: Vec<&str> = header_token
        .into_iter()
        .chain(cookie_token.as_deref())
        .collect();
    state.accounts.logout(tokens).await;

    let jar = jar.remove(Cookie::build(SESSION_COOKIE).path("/"));
    (
        jar,
        Json(ApiResponse::ok(MessageResponse::new(
            "Successfully logged out",
        ))),
    )
}
