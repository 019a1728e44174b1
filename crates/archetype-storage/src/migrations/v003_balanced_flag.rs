//! V003: store the balanced-profile flag separately from the confidence level.
//!
//! Existing rows are backfilled against the default 12.5 band.

pub const MIGRATION_SQL: &str = r#"
ALTER TABLE quiz_results
    ADD COLUMN balanced INTEGER NOT NULL DEFAULT 0 CHECK (balanced IN (0, 1));
UPDATE quiz_results SET balanced = 1
    WHERE abs(structure - 50) <= 12.5
      AND abs(motivation - 50) <= 12.5
      AND abs(cognitive - 50) <= 12.5
      AND abs(task - 50) <= 12.5;
"#;
