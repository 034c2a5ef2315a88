//! SQLite-backed durable slot.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use rusqlite::{Connection, OptionalExtension, params};

use crate::core::store::DayEventStore;

use super::{PersistResult, StoreSlot};

/// Slot key used when none is chosen by the application.
pub const DEFAULT_SLOT_KEY: &str = "events";

/// SQLite implementation of [`crate::persist::StoreSlot`].
///
/// One row per slot key in a `slots` table; a save upserts the full snapshot
/// in a single statement, so readers observe either the old or the new blob,
/// never a partial write.
pub struct SqliteSlot {
    conn: Connection,
    key: String,
}

impl SqliteSlot {
    /// Opens or creates a SQLite-backed slot at `path`.
    ///
    /// Enables WAL mode and sets `synchronous=NORMAL`.
    pub fn open(path: impl AsRef<Path>) -> PersistResult<Self> {
        let conn = Connection::open(path)?;
        Self::init_connection(conn)
    }

    /// Opens an in-memory slot, useful for tests.
    pub fn open_in_memory() -> PersistResult<Self> {
        let conn = Connection::open_in_memory()?;
        Self::init_connection(conn)
    }

    fn init_connection(conn: Connection) -> PersistResult<Self> {
        conn.execute_batch(include_str!("schema.sql"))?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;
        Ok(Self {
            conn,
            key: DEFAULT_SLOT_KEY.to_string(),
        })
    }

    /// Uses `key` as the slot key instead of [`DEFAULT_SLOT_KEY`].
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Returns the slot key in use.
    pub fn key(&self) -> &str {
        &self.key
    }

    fn try_load(&self) -> PersistResult<Option<DayEventStore>> {
        let payload: Option<Vec<u8>> = self
            .conn
            .query_row(
                "SELECT payload FROM slots WHERE key = ?1",
                params![self.key],
                |row| row.get(0),
            )
            .optional()?;

        let Some(payload) = payload else {
            return Ok(None);
        };

        Ok(Some(serde_json::from_slice(&payload)?))
    }
}

impl StoreSlot for SqliteSlot {
    fn load(&mut self) -> DayEventStore {
        match self.try_load() {
            Ok(Some(store)) => store,
            Ok(None) => DayEventStore::new(),
            Err(err) => {
                tracing::warn!("slot `{}` unreadable, starting empty: {err}", self.key);
                DayEventStore::new()
            }
        }
    }

    fn save(&mut self, store: &DayEventStore) -> PersistResult<()> {
        let payload = serde_json::to_vec(store)?;
        self.conn.execute(
            "INSERT INTO slots(key, ts_ms, payload) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET ts_ms = excluded.ts_ms, payload = excluded.payload",
            params![self.key, now_ms() as i64, payload],
        )?;
        tracing::debug!("slot `{}` saved, {} day(s)", self.key, store.day_count());
        Ok(())
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
