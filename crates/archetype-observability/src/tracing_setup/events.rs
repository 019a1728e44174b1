//! Structured log events for quiz operations.
//!
//! Each function emits a `tracing` event with an `event` field naming it.

use archetype_core::models::{ArchetypeId, ConfidenceLevel};

/// A new anonymous session was issued.
pub fn session_started(session_id: &str) {
    tracing::info!(event = "session_started", session_id = %session_id, "session started");
}

/// Answers were scored and the result persisted.
pub fn quiz_submitted(
    session_id: &str,
    archetype: ArchetypeId,
    confidence: ConfidenceLevel,
    bank_version: &str,
) {
    tracing::info!(
        event = "quiz_submitted",
        session_id = %session_id,
        archetype = %archetype,
        confidence = %confidence,
        bank_version = %bank_version,
        "quiz submitted"
    );
}

/// A submission was refused at the boundary.
pub fn submission_rejected(session_id: &str, code: &str, reason: &str) {
    tracing::warn!(
        event = "submission_rejected",
        session_id = %session_id,
        code = %code,
        reason = %reason,
        "submission rejected"
    );
}

/// A result was associated with a user.
pub fn result_claimed(session_id: &str, user_id: &str, archetype: ArchetypeId) {
    tracing::info!(
        event = "result_claimed",
        session_id = %session_id,
        user_id = %user_id,
        archetype = %archetype,
        "result claimed"
    );
}

/// A claim was refused (bad token, foreign owner, unknown session).
pub fn claim_rejected(code: &str, reason: &str) {
    tracing::warn!(event = "claim_rejected", code = %code, reason = %reason, "claim rejected");
}

/// The engine finished opening storage.
pub fn engine_started(db_path: Option<&str>, bank_version: &str, questions: usize) {
    tracing::info!(
        event = "engine_started",
        db_path = db_path.unwrap_or(":memory:"),
        bank_version = %bank_version,
        questions,
        "quiz engine started"
    );
}
