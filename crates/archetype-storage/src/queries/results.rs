//! Insert, get, claim, and per-user listing of quiz results.

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};

use archetype_core::errors::StorageError;
use archetype_core::models::{
    ArchetypeId, Classification, ConfidenceLevel, QuizAnswers, QuizResult, QuizScores, UserId,
};

use crate::to_storage_err;

const SELECT_COLUMNS: &str = "session_id, answers_json, structure, motivation, cognitive, task,
    archetype, confidence_pct, confidence_level, secondary, primary_distance, margin,
    bank_version, created_at, user_id, claimed_at, balanced";

/// Raw column values of one `quiz_results` row, before decoding.
struct ResultRow {
    session_id: String,
    answers_json: String,
    scores: [f64; 4],
    archetype: String,
    confidence_pct: u8,
    confidence_level: String,
    secondary: Option<String>,
    primary_distance: f64,
    margin: f64,
    bank_version: String,
    created_at: String,
    user_id: Option<String>,
    claimed_at: Option<String>,
    balanced: bool,
}

impl ResultRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            session_id: row.get(0)?,
            answers_json: row.get(1)?,
            scores: [row.get(2)?, row.get(3)?, row.get(4)?, row.get(5)?],
            archetype: row.get(6)?,
            confidence_pct: row.get(7)?,
            confidence_level: row.get(8)?,
            secondary: row.get(9)?,
            primary_distance: row.get(10)?,
            margin: row.get(11)?,
            bank_version: row.get(12)?,
            created_at: row.get(13)?,
            user_id: row.get(14)?,
            claimed_at: row.get(15)?,
            balanced: row.get(16)?,
        })
    }

    fn decode(self) -> Result<QuizResult, StorageError> {
        let answers: QuizAnswers = serde_json::from_str(&self.answers_json)
            .map_err(|e| to_storage_err(format!("answers for {}: {e}", self.session_id)))?;
        let scores = QuizScores::from_array(self.scores)
            .map_err(|e| to_storage_err(format!("scores for {}: {e}", self.session_id)))?;
        let confidence_level = ConfidenceLevel::parse(&self.confidence_level).ok_or_else(|| {
            to_storage_err(format!("unknown confidence level: {}", self.confidence_level))
        })?;

        Ok(QuizResult {
            classification: Classification {
                primary: parse_archetype(&self.archetype)?,
                confidence_pct: self.confidence_pct,
                confidence_level,
                balanced: self.balanced,
                secondary: self.secondary.as_deref().map(parse_archetype).transpose()?,
                primary_distance: self.primary_distance,
                margin: self.margin,
            },
            answers,
            scores,
            bank_version: self.bank_version,
            created_at: parse_timestamp(&self.created_at)?,
            user_id: self.user_id.map(UserId),
            claimed_at: self.claimed_at.as_deref().map(parse_timestamp).transpose()?,
            session_id: self.session_id,
        })
    }
}

pub(crate) fn parse_archetype(s: &str) -> Result<ArchetypeId, StorageError> {
    s.parse::<ArchetypeId>()
        .map_err(|e| to_storage_err(e.to_string()))
}

/// Fixed-width UTC timestamps so lexical order matches time order.
fn format_timestamp(t: DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

fn parse_timestamp(s: &str) -> Result<DateTime<Utc>, StorageError> {
    DateTime::parse_from_rfc3339(s)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| to_storage_err(format!("bad timestamp {s}: {e}")))
}

/// Insert a new result. An existing row for the session is never replaced.
pub fn insert_result(conn: &Connection, result: &QuizResult) -> Result<(), StorageError> {
    let answers_json =
        serde_json::to_string(&result.answers).map_err(|e| to_storage_err(e.to_string()))?;
    let c = &result.classification;
    let [structure, motivation, cognitive, task] = result.scores.as_array();

    conn.execute(
        "INSERT INTO quiz_results (
            session_id, answers_json, structure, motivation, cognitive, task,
            archetype, confidence_pct, confidence_level, secondary, primary_distance, margin,
            bank_version, created_at, user_id, claimed_at, balanced
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17)",
        params![
            result.session_id,
            answers_json,
            structure,
            motivation,
            cognitive,
            task,
            c.primary.as_str(),
            c.confidence_pct,
            c.confidence_level.as_str(),
            c.secondary.map(|s| s.as_str()),
            c.primary_distance,
            c.margin,
            result.bank_version,
            format_timestamp(result.created_at),
            result.user_id.as_ref().map(UserId::as_str),
            result.claimed_at.map(format_timestamp),
            c.balanced,
        ],
    )
    .map_err(|e| insert_error(e, &result.session_id))?;
    Ok(())
}

/// Only a primary-key clash is a duplicate session. CHECK and NOT NULL
/// failures are malformed rows and surface as plain SQLite errors.
fn insert_error(e: rusqlite::Error, session_id: &str) -> StorageError {
    match &e {
        rusqlite::Error::SqliteFailure(err, _)
            if err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY =>
        {
            StorageError::DuplicateSession {
                session_id: session_id.to_string(),
            }
        }
        _ => to_storage_err(e.to_string()),
    }
}

/// Fetch one result by session id.
pub fn get_result(conn: &Connection, session_id: &str) -> Result<Option<QuizResult>, StorageError> {
    let mut stmt = conn
        .prepare_cached(&format!(
            "SELECT {SELECT_COLUMNS} FROM quiz_results WHERE session_id = ?1"
        ))
        .map_err(|e| to_storage_err(e.to_string()))?;
    let row = stmt
        .query_row(params![session_id], ResultRow::from_row)
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;
    row.map(ResultRow::decode).transpose()
}

/// Set the owner of an unclaimed result.
/// Returns false when the row is missing or already has an owner.
pub fn set_owner(
    conn: &Connection,
    session_id: &str,
    user_id: &UserId,
    claimed_at: DateTime<Utc>,
) -> Result<bool, StorageError> {
    let changed = conn
        .execute(
            "UPDATE quiz_results SET user_id = ?1, claimed_at = ?2
             WHERE session_id = ?3 AND user_id IS NULL",
            params![user_id.as_str(), format_timestamp(claimed_at), session_id],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(changed == 1)
}

/// Every result owned by a user, oldest first.
pub fn results_for_user(
    conn: &Connection,
    user_id: &UserId,
) -> Result<Vec<QuizResult>, StorageError> {
    let mut stmt = conn
        .prepare_cached(&format!(
            "SELECT {SELECT_COLUMNS} FROM quiz_results
             WHERE user_id = ?1 ORDER BY created_at ASC, session_id ASC"
        ))
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params![user_id.as_str()], ResultRow::from_row)
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut results = Vec::new();
    for row in rows {
        let row = row.map_err(|e| to_storage_err(e.to_string()))?;
        results.push(row.decode()?);
    }
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::migrations::run_migrations;

    const RAW_INSERT: &str = "INSERT INTO quiz_results (session_id, answers_json, structure,
        motivation, cognitive, task, archetype, confidence_pct, confidence_level,
        primary_distance, margin, bank_version, created_at)
        VALUES (?1, '{}', ?2, 50, 50, 50, 'adaptive-generalist', 0, 'weak', 0, 0, 'v', 'now')";

    fn migrated() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        conn
    }

    #[test]
    fn primary_key_clash_is_a_duplicate_session() {
        let conn = migrated();
        conn.execute(RAW_INSERT, params!["s-1", 50.0]).unwrap();
        let err = conn.execute(RAW_INSERT, params!["s-1", 50.0]).unwrap_err();
        assert!(matches!(
            insert_error(err, "s-1"),
            StorageError::DuplicateSession { .. }
        ));
    }

    #[test]
    fn check_failure_is_not_a_duplicate_session() {
        let conn = migrated();
        let err = conn.execute(RAW_INSERT, params!["s-2", 101.0]).unwrap_err();
        assert!(matches!(
            insert_error(err, "s-2"),
            StorageError::SqliteError { .. }
        ));
    }

    #[test]
    fn not_null_failure_is_not_a_duplicate_session() {
        let conn = migrated();
        let err = conn
            .execute(
                "INSERT INTO quiz_results (session_id, answers_json) VALUES ('s-3', NULL)",
                [],
            )
            .unwrap_err();
        assert!(matches!(
            insert_error(err, "s-3"),
            StorageError::SqliteError { .. }
        ));
    }
}
