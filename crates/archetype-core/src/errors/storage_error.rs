//! Storage-layer errors for SQLite operations.

use super::error_code::{self, ErrorCode};

/// Storage-layer errors for SQLite operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error("migration failed at version {version}: {reason}")]
    MigrationFailed { version: u32, reason: String },

    #[error("a result already exists for session {session_id}")]
    DuplicateSession { session_id: String },

    #[error("no result for session {session_id}")]
    NotFound { session_id: String },

    #[error("result for session {session_id} is already claimed by another user")]
    AlreadyClaimed { session_id: String },
}

impl ErrorCode for StorageError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::SqliteError { .. } => error_code::STORAGE_ERROR,
            Self::MigrationFailed { .. } => error_code::MIGRATION_FAILED,
            Self::DuplicateSession { .. } => error_code::DUPLICATE_SESSION,
            Self::NotFound { .. } => error_code::RESULT_NOT_FOUND,
            Self::AlreadyClaimed { .. } => error_code::ALREADY_CLAIMED,
        }
    }
}
