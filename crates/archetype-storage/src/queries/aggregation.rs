//! Reporting queries: counts and archetype distribution.

use rusqlite::Connection;

use archetype_core::errors::StorageError;
use archetype_core::models::ArchetypeId;

use super::results::parse_archetype;
use crate::to_storage_err;

/// Total number of stored results.
pub fn count_results(conn: &Connection) -> Result<usize, StorageError> {
    let n: i64 = conn
        .query_row("SELECT COUNT(*) FROM quiz_results", [], |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(n as usize)
}

/// Results per primary archetype, in `ArchetypeId::ALL` order, zeros included.
pub fn archetype_distribution(conn: &Connection) -> Result<Vec<(ArchetypeId, usize)>, StorageError> {
    let mut stmt = conn
        .prepare_cached("SELECT archetype, COUNT(*) FROM quiz_results GROUP BY archetype")
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?)))
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut counts = [0usize; ArchetypeId::COUNT];
    for row in rows {
        let (archetype, n) = row.map_err(|e| to_storage_err(e.to_string()))?;
        let id = parse_archetype(&archetype)?;
        counts[id as usize] += n as usize;
    }
    Ok(ArchetypeId::ALL.into_iter().zip(counts).collect())
}
