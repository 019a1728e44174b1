//! V001: quiz_results.

pub const MIGRATION_SQL: &str = r#"
-- One immutable row per quiz session. Only user_id / claimed_at change,
-- once, when the result is claimed.
CREATE TABLE IF NOT EXISTS quiz_results (
    session_id TEXT PRIMARY KEY,
    answers_json TEXT NOT NULL,
    structure REAL NOT NULL CHECK (structure BETWEEN 0 AND 100),
    motivation REAL NOT NULL CHECK (motivation BETWEEN 0 AND 100),
    cognitive REAL NOT NULL CHECK (cognitive BETWEEN 0 AND 100),
    task REAL NOT NULL CHECK (task BETWEEN 0 AND 100),
    archetype TEXT NOT NULL,
    confidence_pct INTEGER NOT NULL,
    confidence_level TEXT NOT NULL,
    secondary TEXT,
    primary_distance REAL NOT NULL,
    margin REAL NOT NULL,
    bank_version TEXT NOT NULL,
    created_at TEXT NOT NULL,
    user_id TEXT,
    claimed_at TEXT
) STRICT;
"#;
