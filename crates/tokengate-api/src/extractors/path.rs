//! Typed path parameter helpers.

use tokengate_core::error::AppError;
use tokengate_core::types::PostId;

/// Parses a post ID from a path segment.
pub fn parse_post_id(s: &str) -> Result<PostId, AppError> {
    s.parse().map_err(|_| AppError::validation("Invalid post ID"))
}
