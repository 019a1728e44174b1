//! Question bank loading errors.

use super::error_code::{self, ErrorCode};

/// Errors raised while loading or checking a question bank.
#[derive(Debug, thiserror::Error)]
pub enum QuestionBankError {
    #[error("question bank parse error: {message}")]
    ParseError { message: String },

    #[error("duplicate question id: {question_id}")]
    DuplicateQuestion { question_id: String },

    #[error("invalid question {question_id}: {reason}")]
    InvalidQuestion { question_id: String, reason: String },

    #[error("axis {axis} has no questions")]
    EmptyAxis { axis: String },
}

impl ErrorCode for QuestionBankError {
    fn error_code(&self) -> &'static str {
        error_code::QUESTION_BANK_ERROR
    }
}
