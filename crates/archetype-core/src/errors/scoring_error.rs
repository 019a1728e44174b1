/// Scoring and classification errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScoringError {
    #[error("score for axis {axis} out of range: {value}")]
    ScoreOutOfRange { axis: String, value: f64 },

    #[error("axis {axis} has no attainable range")]
    DegenerateAxis { axis: String },

    #[error("answers were validated against bank {validated}, not {scoring}")]
    BankMismatch { validated: String, scoring: String },
}

impl super::ErrorCode for ScoringError {
    fn error_code(&self) -> &'static str {
        super::error_code::INVALID_SCORES
    }
}
