//! Session credential errors.

use super::error_code::{self, ErrorCode};

/// Errors raised while issuing or verifying signed session tokens.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SessionError {
    #[error("malformed session token: {reason}")]
    Malformed { reason: String },

    #[error("session token signature mismatch")]
    BadSignature,

    #[error("session token expired at {expired_at}")]
    Expired { expired_at: i64 },

    #[error("invalid session id: {session_id}")]
    InvalidSessionId { session_id: String },

    #[error("invalid user id")]
    InvalidUserId,
}

impl ErrorCode for SessionError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Expired { .. } => error_code::SESSION_EXPIRED,
            _ => error_code::INVALID_SESSION,
        }
    }
}
