//! `AuthUser` extractor: runs the request authenticator on the Authorization header.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use tokengate_auth::AuthenticatedUser;

use crate::error::ApiError;
use crate::state::AppState;

/// The authenticated principal, available to handlers of protected routes.
#[derive(Debug, Clone)]
pub struct AuthUser(pub AuthenticatedUser);

impl std::ops::Deref for AuthUser {
    type Target = AuthenticatedUser;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // A header that is not valid UTF-8 counts as missing.
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok());

        let user = state
            .authenticator
            .authenticate(header)
            .await
            .inspect_err(|e| {
                tracing::debug!(
                    path = %parts.uri.path(),
                    reason = e.reason(),
                    "Unauthenticated request"
                );
            })?;

        Ok(AuthUser(user))
    }
}
