//! SQLite key/value backend.
//!
//! # Responsibility
//! - Open file or in-memory SQLite connections for the registry.
//! - Keep the serialized collection in a one-row key/value table.
//!
//! # Invariants
//! - Returned connections have the `kv_store` table ready.
//! - `write` replaces the stored payload in a single UPSERT statement.

use std::path::Path;
use std::time::{Duration, Instant};

use log::{error, info};
use rusqlite::Connection;

use super::backend::{BackendResult, StorageBackend};
use super::STORAGE_KEY;

const KV_SCHEMA: &str = "CREATE TABLE IF NOT EXISTS kv_store (
    key   TEXT PRIMARY KEY NOT NULL,
    value TEXT NOT NULL
);";

/// Embedded key/value table holding the serialized collection.
pub struct SqliteKvBackend {
    conn: Connection,
}

impl SqliteKvBackend {
    /// Opens (or creates) a database file and prepares the key/value table.
    ///
    /// # Side effects
    /// - Emits `kv_open` logging events with duration and status.
    pub fn open(path: impl AsRef<Path>) -> BackendResult<Self> {
        let started_at = Instant::now();
        info!("event=kv_open module=store status=start mode=file");

        let conn = match Connection::open(path) {
            Ok(conn) => conn,
            Err(err) => {
                error!(
                    "event=kv_open module=store status=error mode=file duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                return Err(err.into());
            }
        };

        Self::bootstrap(conn, started_at, "file")
    }

    /// Opens an in-memory database; handy for tests.
    pub fn open_in_memory() -> BackendResult<Self> {
        let started_at = Instant::now();
        info!("event=kv_open module=store status=start mode=memory");

        let conn = match Connection::open_in_memory() {
            Ok(conn) => conn,
            Err(err) => {
                error!(
                    "event=kv_open module=store status=error mode=memory duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                return Err(err.into());
            }
        };

        Self::bootstrap(conn, started_at, "memory")
    }

    fn bootstrap(conn: Connection, started_at: Instant, mode: &str) -> BackendResult<Self> {
        match Self::prepare(&conn) {
            Ok(()) => {
                info!(
                    "event=kv_open module=store status=ok mode={} duration_ms={}",
                    mode,
                    started_at.elapsed().as_millis()
                );
                Ok(Self { conn })
            }
            Err(err) => {
                error!(
                    "event=kv_open module=store status=error mode={} duration_ms={} error={}",
                    mode,
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }

    fn prepare(conn: &Connection) -> BackendResult<()> {
        conn.busy_timeout(Duration::from_secs(5))?;
        conn.execute_batch(KV_SCHEMA)?;
        Ok(())
    }
}

impl StorageBackend for SqliteKvBackend {
    fn read(&self) -> BackendResult<Option<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT value FROM kv_store WHERE key = ?1;")?;
        let mut rows = stmt.query([STORAGE_KEY])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(row.get(0)?));
        }
        Ok(None)
    }

    fn write(&self, payload: &str) -> BackendResult<()> {
        self.conn.execute(
            "INSERT INTO kv_store (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value;",
            [STORAGE_KEY, payload],
        )?;
        Ok(())
    }
}
