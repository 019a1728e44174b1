//! Schema migrations tracked through `PRAGMA user_version`.
//! Each migration runs in its own transaction; the version is bumped only
//! after the migration's SQL succeeds.

pub mod v001_initial;
pub mod v002_reporting_indexes;
pub mod v003_balanced_flag;

use archetype_core::errors::StorageError;
use rusqlite::Connection;

/// Ordered `(version, sql)` list. Versions are contiguous starting at 1.
const MIGRATIONS: &[(u32, &str)] = &[
    (1, v001_initial::MIGRATION_SQL),
    (2, v002_reporting_indexes::MIGRATION_SQL),
    (3, v003_balanced_flag::MIGRATION_SQL),
];

/// Latest schema version this build knows about.
pub const LATEST_VERSION: u32 = MIGRATIONS.len() as u32;

/// Current schema version of a database.
pub fn current_version(conn: &Connection) -> Result<u32, StorageError> {
    conn.pragma_query_value(None, "user_version", |row| row.get::<_, u32>(0))
        .map_err(|e| StorageError::SqliteError {
            message: e.to_string(),
        })
}

/// Apply every migration newer than the database's `user_version`.
/// Returns the number of migrations applied.
pub fn run_migrations(conn: &Connection) -> Result<usize, StorageError> {
    let current = current_version(conn)?;
    if current > LATEST_VERSION {
        return Err(StorageError::MigrationFailed {
            version: current,
            reason: format!("database schema is newer than this build (latest {LATEST_VERSION})"),
        });
    }

    let mut applied = 0;
    for &(version, sql) in MIGRATIONS.iter().filter(|(v, _)| *v > current) {
        let fail = |e: rusqlite::Error| StorageError::MigrationFailed {
            version,
            reason: e.to_string(),
        };
        let tx = conn.unchecked_transaction().map_err(fail)?;
        tx.execute_batch(sql).map_err(fail)?;
        tx.pragma_update(None, "user_version", version).map_err(fail)?;
        tx.commit().map_err(fail)?;

        tracing::info!(version, "applied migration");
        applied += 1;
    }
    Ok(applied)
}
