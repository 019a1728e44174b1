//! # archetype-storage
//!
//! SQLite persistence for immutable quiz results.
//! Single serialized writer, round-robin read pool, `PRAGMA user_version`
//! migrations, and a `DashMap`-backed store for tests and ephemeral use.

pub mod connection;
pub mod engine;
pub mod memory;
pub mod migrations;
pub mod queries;

pub use connection::DatabaseManager;
pub use engine::StorageEngine;
pub use memory::InMemoryResultStore;

use archetype_core::errors::StorageError;

/// Wrap any displayable failure as a `StorageError::SqliteError`.
pub(crate) fn to_storage_err(message: impl Into<String>) -> StorageError {
    StorageError::SqliteError {
        message: message.into(),
    }
}
