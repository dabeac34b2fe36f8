//! Authentication failure taxonomy.

use thiserror::Error;

use tokengate_core::error::{AppError, ErrorKind};

/// Why a request was refused or a token could not be issued.
///
/// `MissingToken`, `InvalidToken` and `SessionAbsent` are all reported to
/// clients as plain "unauthorized"; the distinction only shows up in logs.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No `Authorization: Bearer <token>` header, or a malformed one.
    #[error("missing token")]
    MissingToken,

    /// Bad signature, undecodable payload, or expired claims.
    #[error("invalid token: {0}")]
    InvalidToken(String),

    /// Signature is fine but the session store holds no live entry.
    #[error("expired or revoked session")]
    SessionAbsent,

    /// The session store could not be reached or timed out.
    #[error("session store unavailable")]
    StoreUnavailable(#[source] AppError),

    /// Signing or registering a fresh token failed.
    #[error("token issuance failed")]
    Issuance(#[source] AppError),
}

impl AuthError {
    /// Short label used as the `reason` field in logs.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::MissingToken => "missing_token",
            Self::InvalidToken(_) => "invalid_token",
            Self::SessionAbsent => "session_absent",
            Self::StoreUnavailable(_) => "store_unavailable",
            Self::Issuance(_) => "issuance_failed",
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::MissingToken => AppError::authentication("Unauthorized - No token provided"),
            AuthError::InvalidToken(_) => AppError::authentication("Invalid token"),
            AuthError::SessionAbsent => AppError::authentication("Invalid or expired session"),
            AuthError::StoreUnavailable(source) => AppError::with_source(
                ErrorKind::ServiceUnavailable,
                "Authentication service unavailable",
                source,
            ),
            AuthError::Issuance(source) => {
                let kind = match source.kind {
                    ErrorKind::Cache | ErrorKind::ServiceUnavailable => {
                        ErrorKind::ServiceUnavailable
                    }
                    _ => ErrorKind::Internal,
                };
                AppError::with_source(kind, "Could not start a session", source)
            }
        }
    }
}
