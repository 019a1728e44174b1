//! Top-level error aggregating every subsystem.

use super::error_code::{self, ErrorCode};
use super::{
    ConfigError, QuestionBankError, ScoringError, SessionError, StorageError, ValidationError,
};

/// Top-level error type. Subsystem errors convert via `From`.
#[derive(Debug, thiserror::Error)]
pub enum ArchetypeError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("scoring error: {0}")]
    Scoring(#[from] ScoringError),

    #[error("question bank error: {0}")]
    QuestionBank(#[from] QuestionBankError),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("session error: {0}")]
    Session(#[from] SessionError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience alias used throughout the workspace.
pub type ArchetypeResult<T> = Result<T, ArchetypeError>;

impl ErrorCode for ArchetypeError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(e) => e.error_code(),
            Self::Scoring(e) => e.error_code(),
            Self::QuestionBank(e) => e.error_code(),
            Self::Storage(e) => e.error_code(),
            Self::Session(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Serialization(_) => error_code::SERIALIZATION_ERROR,
        }
    }
}
