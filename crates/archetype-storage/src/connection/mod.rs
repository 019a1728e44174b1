//! Connection management: write-serialized + read-pooled.

pub mod pool;
pub mod pragmas;
pub mod writer;

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use archetype_core::config::StorageConfig;
use archetype_core::errors::StorageError;
use rusqlite::Connection;

use self::pool::ReadPool;
use self::pragmas::apply_pragmas;
use crate::{migrations, to_storage_err};

/// Owns the single write connection and the read connection pool.
pub struct DatabaseManager {
    writer: Mutex<Connection>,
    /// `None` for in-memory databases, which readers cannot see.
    readers: Option<ReadPool>,
    path: Option<PathBuf>,
}

impl DatabaseManager {
    /// Open a database at the given path, apply pragmas, run migrations.
    pub fn open(path: &Path, config: &StorageConfig) -> Result<Self, StorageError> {
        let writer = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&writer, config.busy_timeout_ms)?;
        migrations::run_migrations(&writer)?;

        let readers = ReadPool::open(path, config.read_pool_size, config.busy_timeout_ms)?;

        Ok(Self {
            writer: Mutex::new(writer),
            readers: Some(readers),
            path: Some(path.to_path_buf()),
        })
    }

    /// Open an in-memory database.
    /// Readers cannot see a private in-memory database, so callers must route
    /// reads through the writer and no read pool is opened.
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let writer = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&writer, StorageConfig::default().busy_timeout_ms)?;
        migrations::run_migrations(&writer)?;

        Ok(Self {
            writer: Mutex::new(writer),
            readers: None,
            path: None,
        })
    }

    /// Execute a write operation with the serialized writer connection.
    pub fn with_writer<F, T>(&self, f: F) -> Result<T, StorageError>
    where
        F: FnOnce(&Connection) -> Result<T, StorageError>,
    {
        let guard = self
            .writer
            .lock()
            .map_err(|_| to_storage_err("write lock poisoned"))?;
        f(&guard)
    }

    /// Execute a read operation. File-backed databases use the read pool;
    /// in-memory databases read through the writer.
    pub fn with_reader<F, T>(&self, f: F) -> Result<T, StorageError>
    where
        F: FnOnce(&Connection) -> Result<T, StorageError>,
    {
        match &self.readers {
            Some(pool) => pool.with_conn(f),
            None => self.with_writer(f),
        }
    }

    pub fn has_read_pool(&self) -> bool {
        self.readers.is_some()
    }

    /// Run a WAL checkpoint (TRUNCATE mode).
    pub fn checkpoint(&self) -> Result<(), StorageError> {
        self.with_writer(|conn| {
            conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")
                .map_err(|e| to_storage_err(e.to_string()))
        })
    }

    /// Database file path (None for in-memory).
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn read_pool_size(&self) -> usize {
        self.readers.as_ref().map_or(0, ReadPool::size)
    }
}
