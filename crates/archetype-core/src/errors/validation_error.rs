//! Answer validation errors raised at the submission boundary.

use super::error_code::{self, ErrorCode};

/// Rejections produced while validating raw quiz answers.
/// The caller re-prompts; the scorer never guesses intent.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("invalid answer for question {question_id}: {reason}")]
    InvalidAnswer { question_id: String, reason: String },

    #[error("missing answers for {} question(s): {}", question_ids.len(), question_ids.join(", "))]
    MissingAnswers { question_ids: Vec<String> },

    #[error("unknown question id: {question_id}")]
    UnknownQuestion { question_id: String },
}

impl ValidationError {
    /// The first question id this error points at, for re-prompting.
    pub fn question_id(&self) -> Option<&str> {
        match self {
            Self::InvalidAnswer { question_id, .. } | Self::UnknownQuestion { question_id } => {
                Some(question_id)
            }
            Self::MissingAnswers { question_ids } => question_ids.first().map(String::as_str),
        }
    }
}

impl ErrorCode for ValidationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidAnswer { .. } => error_code::INVALID_ANSWER,
            Self::MissingAnswers { .. } => error_code::MISSING_ANSWERS,
            Self::UnknownQuestion { .. } => error_code::UNKNOWN_QUESTION,
        }
    }
}
