//! Span definitions per operation: submit, claim.

/// Create a submission span.
#[macro_export]
macro_rules! submit_span {
    ($session_id:expr) => {
        tracing::info_span!("archetype.submit", session_id = %$session_id)
    };
}

/// Create a claim span.
#[macro_export]
macro_rules! claim_span {
    ($user_id:expr) => {
        tracing::info_span!("archetype.claim", user_id = %$user_id)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const SUBMIT: &str = "archetype.submit";
    pub const CLAIM: &str = "archetype.claim";
}
