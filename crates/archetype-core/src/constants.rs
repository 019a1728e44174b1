/// Lowest value on the default likert scale.
pub const LIKERT_MIN: u8 = 1;

/// Highest value on the default likert scale.
pub const LIKERT_MAX: u8 = 5;

/// Bounds of a normalised axis score.
pub const SCORE_MIN: f64 = 0.0;
pub const SCORE_MAX: f64 = 100.0;

/// Questions per axis in the default bank.
pub const DEFAULT_QUESTIONS_PER_AXIS: usize = 7;

/// Number of questions in the default bank.
pub const DEFAULT_QUESTION_COUNT: usize = DEFAULT_QUESTIONS_PER_AXIS * 4;

/// Version tag of the built-in question bank, persisted with every result.
pub const DEFAULT_BANK_VERSION: &str = "2024.1";

/// Session ids are opaque but must be URL- and cookie-safe.
pub const SESSION_ID_MAX_LEN: usize = 128;
pub const SESSION_ID_MIN_LEN: usize = 8;

/// Length in bytes of the session signing key.
pub const SESSION_KEY_LEN: usize = 32;

/// Engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
