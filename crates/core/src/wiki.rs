//! Wiki document validation rules.
//!
//! A wiki is a title plus a free-form body owned by a single user. The rules
//! here are enforced by the API handlers before any row is written.

use crate::error::CoreError;

/// Maximum wiki title length in bytes.
pub const MAX_TITLE_LENGTH: usize = 200;

/// Maximum wiki body length in bytes.
pub const MAX_BODY_LENGTH: usize = 100_000;

/// Validate a wiki title (non-empty, <= 200 chars).
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation("Title must not be empty".into()));
    }
    if title.len() > MAX_TITLE_LENGTH {
        return Err(CoreError::Validation(format!(
            "Title must be at most {MAX_TITLE_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate a wiki body (non-empty, length-capped).
pub fn validate_body(body: &str) -> Result<(), CoreError> {
    if body.trim().is_empty() {
        return Err(CoreError::Validation("Body must not be empty".into()));
    }
    if body.len() > MAX_BODY_LENGTH {
        return Err(CoreError::Validation(format!(
            "Body must be at most {MAX_BODY_LENGTH} characters"
        )));
    }
    Ok(())
}
