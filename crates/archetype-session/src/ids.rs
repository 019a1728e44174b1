//! Session and user id checks.

use std::sync::LazyLock;

use regex::Regex;

use archetype_core::constants::{SESSION_ID_MAX_LEN, SESSION_ID_MIN_LEN};
use archetype_core::errors::SessionError;
use archetype_core::models::UserId;

const MAX_USER_ID_LEN: usize = 256;

/// `None` only if the pattern fails to compile, in which case every id is rejected.
static SESSION_ID_RE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(&format!(
        "^[A-Za-z0-9_-]{{{SESSION_ID_MIN_LEN},{SESSION_ID_MAX_LEN}}}$"
    ))
    .ok()
});

/// Fresh random session id (hyphenated UUID v4).
pub fn new_session_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Session ids are 8–128 characters of `[A-Za-z0-9_-]`. The restricted
/// alphabet keeps `.` free as the token separator.
pub fn validate_session_id(session_id: &str) -> Result<(), SessionError> {
    if SESSION_ID_RE
        .as_ref()
        .is_some_and(|re| re.is_match(session_id))
    {
        Ok(())
    } else {
        Err(SessionError::InvalidSessionId {
            session_id: session_id.to_string(),
        })
    }
}

/// User ids come from the auth provider; only reject obviously broken ones.
pub fn validate_user_id(user_id: &UserId) -> Result<(), SessionError> {
    let id = user_id.as_str();
    if id.trim().is_empty() || id.len() > MAX_USER_ID_LEN || id.chars().any(char::is_control) {
        return Err(SessionError::InvalidUserId);
    }
    Ok(())
}
