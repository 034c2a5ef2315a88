pub mod sqlite;

use std::fmt;

use crate::core::store::DayEventStore;

/// Failure writing to or decoding the durable slot.
#[derive(Debug)]
pub enum PersistError {
    /// Underlying SQLite failure.
    Sqlite(rusqlite::Error),
    /// Blob (de)serialization failure.
    Serde(serde_json::Error),
}

impl From<rusqlite::Error> for PersistError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

impl From<serde_json::Error> for PersistError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serde(value)
    }
}

impl fmt::Display for PersistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "sqlite error: {err}"),
            Self::Serde(err) => write!(f, "serialization error: {err}"),
        }
    }
}

impl std::error::Error for PersistError {}

/// Result alias for slot operations.
pub type PersistResult<T> = Result<T, PersistError>;

/// A single named durable slot holding one serialized [`DayEventStore`].
///
/// The blob format is a JSON object whose keys are day strings and whose
/// values are arrays of event objects. `load` then `save` then `load` yields
/// a store structurally equal to the saved one for all valid stores.
pub trait StoreSlot: Send {
    /// Reads the serialized store from the slot.
    ///
    /// Absent or malformed content degrades to an empty store; corrupt
    /// persisted state must never surface as an error to the caller.
    fn load(&mut self) -> DayEventStore;

    /// Atomically overwrites the slot with a full snapshot of `store`.
    fn save(&mut self, store: &DayEventStore) -> PersistResult<()>;
}
