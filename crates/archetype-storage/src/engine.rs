//! StorageEngine — owns the DatabaseManager and implements IResultStorage.

use std::path::Path;

use chrono::Utc;

use archetype_core::config::StorageConfig;
use archetype_core::errors::{ArchetypeResult, StorageError};
use archetype_core::models::{ArchetypeId, QuizResult, UserId};
use archetype_core::traits::IResultStorage;

use crate::connection::writer::with_immediate_transaction;
use crate::connection::DatabaseManager;
use crate::queries::{aggregation, results};

/// SQLite-backed result store.
pub struct StorageEngine {
    db: DatabaseManager,
}

impl StorageEngine {
    /// Open (or create) the database file and bring its schema up to date.
    pub fn open(path: &Path, config: &StorageConfig) -> ArchetypeResult<Self> {
        let db = DatabaseManager::open(path, config)?;
        tracing::debug!(path = %path.display(), readers = db.read_pool_size(), "result store opened");
        Ok(Self { db })
    }

    /// Private in-memory database. All reads go through the writer.
    pub fn open_in_memory() -> ArchetypeResult<Self> {
        Ok(Self {
            db: DatabaseManager::open_in_memory()?,
        })
    }

    pub fn database(&self) -> &DatabaseManager {
        &self.db
    }
}

/// Decide the outcome of a claim against the current row.
/// `Ok(Some)` means the claim is already satisfied; `Ok(None)` means the row
/// is unclaimed and must be updated.
pub(crate) fn check_claim(
    existing: Option<&QuizResult>,
    session_id: &str,
    user_id: &UserId,
) -> Result<Option<QuizResult>, StorageError> {
    let Some(result) = existing else {
        return Err(StorageError::NotFound {
            session_id: session_id.to_string(),
        });
    };
    match &result.user_id {
        None => Ok(None),
        Some(owner) if owner == user_id => Ok(Some(result.clone())),
        Some(_) => Err(StorageError::AlreadyClaimed {
            session_id: session_id.to_string(),
        }),
    }
}

impl IResultStorage for StorageEngine {
    fn insert(&self, result: &QuizResult) -> ArchetypeResult<()> {
        self.db
            .with_writer(|conn| results::insert_result(conn, result))?;
        tracing::debug!(session_id = %result.session_id, "result stored");
        Ok(())
    }

    fn get(&self, session_id: &str) -> ArchetypeResult<Option<QuizResult>> {
        Ok(self
            .db
            .with_reader(|conn| results::get_result(conn, session_id))?)
    }

    fn claim(&self, session_id: &str, user_id: &UserId) -> ArchetypeResult<QuizResult> {
        let claimed = self.db.with_writer(|conn| {
            with_immediate_transaction(conn, |tx| {
                let existing = results::get_result(tx, session_id)?;
                if let Some(done) = check_claim(existing.as_ref(), session_id, user_id)? {
                    return Ok(done);
                }
                if !results::set_owner(tx, session_id, user_id, Utc::now())? {
                    return Err(StorageError::AlreadyClaimed {
                        session_id: session_id.to_string(),
                    });
                }
                results::get_result(tx, session_id)?.ok_or_else(|| StorageError::NotFound {
                    session_id: session_id.to_string(),
                })
            })
        })?;
        Ok(claimed)
    }

    fn results_for_user(&self, user_id: &UserId) -> ArchetypeResult<Vec<QuizResult>> {
        Ok(self
            .db
            .with_reader(|conn| results::results_for_user(conn, user_id))?)
    }

    fn archetype_distribution(&self) -> ArchetypeResult<Vec<(ArchetypeId, usize)>> {
        Ok(self.db.with_reader(aggregation::archetype_distribution)?)
    }

    fn count(&self) -> ArchetypeResult<usize> {
        Ok(self.db.with_reader(aggregation::count_results)?)
    }
}
