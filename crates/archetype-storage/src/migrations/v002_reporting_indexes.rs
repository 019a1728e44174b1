//! V002: indexes for per-user lookups and archetype reporting.

pub const MIGRATION_SQL: &str = r#"
CREATE INDEX IF NOT EXISTS idx_quiz_results_user
    ON quiz_results(user_id, created_at) WHERE user_id IS NOT NULL;
CREATE INDEX IF NOT EXISTS idx_quiz_results_archetype
    ON quiz_results(archetype);
"#;
