//! ErrorCode trait for the request boundary.

/// Structured error code for callers that cannot match on Rust enums
/// (HTTP handlers, TypeScript clients).
pub trait ErrorCode {
    /// Returns the error code string (e.g., "INVALID_ANSWER").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted boundary string: `[ERROR_CODE] message`.
    fn boundary_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Error code constants for the request boundary.
pub const INVALID_ANSWER: &str = "INVALID_ANSWER";
pub const MISSING_ANSWERS: &str = "MISSING_ANSWERS";
pub const UNKNOWN_QUESTION: &str = "UNKNOWN_QUESTION";
pub const INVALID_SCORES: &str = "INVALID_SCORES";
pub const QUESTION_BANK_ERROR: &str = "QUESTION_BANK_ERROR";
pub const DUPLICATE_SESSION: &str = "DUPLICATE_SESSION";
pub const RESULT_NOT_FOUND: &str = "RESULT_NOT_FOUND";
pub const ALREADY_CLAIMED: &str = "ALREADY_CLAIMED";
pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
pub const MIGRATION_FAILED: &str = "MIGRATION_FAILED";
pub const INVALID_SESSION: &str = "INVALID_SESSION";
pub const SESSION_EXPIRED: &str = "SESSION_EXPIRED";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";
