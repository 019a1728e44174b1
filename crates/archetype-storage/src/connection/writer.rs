//! Write connection utilities — BEGIN IMMEDIATE transactions.

use archetype_core::errors::StorageError;
use rusqlite::{Connection, Transaction, TransactionBehavior};

use crate::to_storage_err;

/// Run `f` inside a BEGIN IMMEDIATE transaction.
/// Takes the write lock up front so a read-then-write sequence cannot race
/// another writer. Dropping the transaction on error rolls it back.
pub fn with_immediate_transaction<F, T>(conn: &Connection, f: F) -> Result<T, StorageError>
where
    F: FnOnce(&Transaction<'_>) -> Result<T, StorageError>,
{
    let tx = Transaction::new_unchecked(conn, TransactionBehavior::Immediate)
        .map_err(|e| to_storage_err(format!("failed to begin immediate transaction: {e}")))?;

    let result = f(&tx)?;

    tx.commit()
        .map_err(|e| to_storage_err(format!("failed to commit: {e}")))?;

    Ok(result)
}
