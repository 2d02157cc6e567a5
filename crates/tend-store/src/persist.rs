//! Durable snapshot persistence
//!
//! The in-memory roster stays authoritative; persistence failures are
//! surfaced for retry of the write, never of the mutation.

use rusqlite::{params, Connection, OptionalExtension};
use std::fmt::Display;
use std::path::Path;
use std::time::Duration;
use tend_domain::{RosterPersistence, RosterSnapshot};
use thiserror::Error;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Errors from durable reads and writes
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Snapshot (de)serialization error
    #[error("Snapshot serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// SQLite-backed implementation of [`RosterPersistence`]
///
/// Stores one snapshot row per user. Use `:memory:` for tests.
///
/// # Thread Safety
///
/// SQLite connections are not thread-safe; each writer task owns its own
/// `SqliteStore`.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) the snapshot database at the given path
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use tend_store::SqliteStore;
    ///
    /// let store = SqliteStore::new("tend.db").unwrap();
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    fn initialize_schema(&self) -> Result<(), PersistenceError> {
        let schema = include_str!("schema.sql");
        self.conn.execute_batch(schema)?;
        Ok(())
    }
}

impl RosterPersistence for SqliteStore {
    type Error = PersistenceError;

    fn save(&mut self, user_id: &str, snapshot: &RosterSnapshot) -> Result<(), Self::Error> {
        let blob = serde_json::to_string(snapshot)?;
        let updated_at = chrono::Utc::now().timestamp();
        self.conn.execute(
            "INSERT INTO roster_snapshots (user_id, snapshot, updated_at)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(user_id) DO UPDATE SET snapshot = ?2, updated_at = ?3",
            params![user_id, blob, updated_at],
        )?;
        Ok(())
    }

    fn load(&self, user_id: &str) -> Result<Option<RosterSnapshot>, Self::Error> {
        let blob: Option<String> = self
            .conn
            .query_row(
                "SELECT snapshot FROM roster_snapshots WHERE user_id = ?1",
                params![user_id],
                |row| row.get(0),
            )
            .optional()?;

        match blob {
            Some(blob) => Ok(Some(serde_json::from_str(&blob)?)),
            None => Ok(None),
        }
    }

    fn clear(&mut self, user_id: &str) -> Result<(), Self::Error> {
        self.conn.execute(
            "DELETE FROM roster_snapshots WHERE user_id = ?1",
            params![user_id],
        )?;
        Ok(())
    }
}

/// Background writer that coalesces rapid successive snapshots
///
/// Mutations queue snapshots without blocking; the writer task sleeps for
/// the debounce window and persists only the latest one, so a burst of
/// edits produces a single durable write. A later queue supersedes an
/// earlier in-flight intent (watch channel keeps only the newest value).
pub struct PersistenceHandle {
    tx: watch::Sender<Option<RosterSnapshot>>,
    task: JoinHandle<()>,
}

impl PersistenceHandle {
    /// Spawn the writer task for one user's roster
    pub fn spawn<P>(mut store: P, user_id: String, debounce: Duration) -> Self
    where
        P: RosterPersistence + Send + 'static,
        P::Error: Display,
    {
        let (tx, mut rx) = watch::channel(None::<RosterSnapshot>);

        let task = tokio::spawn(async move {
            while rx.changed().await.is_ok() {
                tokio::time::sleep(debounce).await;
                let latest = rx.borrow_and_update().clone();
                if let Some(snapshot) = latest {
                    match store.save(&user_id, &snapshot) {
                        Ok(()) => tracing::debug!(user = %user_id, "snapshot persisted"),
                        Err(e) => {
                            // In-memory state stays authoritative; the next
                            // queued snapshot retries the write
                            tracing::warn!(user = %user_id, error = %e, "snapshot write failed");
                        }
                    }
                }
            }
            tracing::debug!(user = %user_id, "persistence writer stopped");
        });

        Self { tx, task }
    }

    /// Queue the latest snapshot for durable write
    pub fn queue(&self, snapshot: RosterSnapshot) {
        // Send only fails when the writer task is gone; nothing to do then
        let _ = self.tx.send(Some(snapshot));
    }

    /// Close the channel and wait for the final write to land
    pub async fn shutdown(self) {
        drop(self.tx);
        let _ = self.task.await;
    }
}
