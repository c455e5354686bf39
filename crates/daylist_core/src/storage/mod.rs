//! Persistence boundary for the activity collection.
//!
//! # Responsibility
//! - Define the save/load contract the store depends on.
//! - Encode/decode the canonical payload: one JSON array of activity
//!   records under a single storage key.
//!
//! # Invariants
//! - `save` replaces the entire stored collection atomically.
//! - `load` never fails: missing, unreadable, or invalid payloads yield an
//!   empty collection and a diagnostic log event.

use crate::db::DbError;
use crate::model::activity::Activity;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod memory;
pub mod sqlite;

/// Single key under which the whole serialized collection lives.
pub const STORAGE_KEY: &str = "dailyActivities";

pub type StorageResult<T> = Result<T, StorageError>;

/// Write-path error for activity persistence.
///
/// The read path recovers locally instead of surfacing errors, so only
/// save-side failures appear here.
#[derive(Debug)]
pub enum StorageError {
    Db(DbError),
    Encode(serde_json::Error),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode activity collection: {err}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<DbError> for StorageError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

/// Persistence adapter for the activity collection.
///
/// The store neither knows nor cares what sits behind this boundary; it
/// only requires synchronous save/load over the whole collection.
pub trait ActivityStorage {
    /// Atomically replaces the stored collection with `activities`.
    fn save(&self, activities: &[Activity]) -> StorageResult<()>;

    /// Returns the stored collection.
    ///
    /// Empty when nothing is stored or the payload cannot be decoded;
    /// corruption is logged and recovered, never propagated.
    fn load(&self) -> Vec<Activity>;
}

impl<S: ActivityStorage + ?Sized> ActivityStorage for &S {
    fn save(&self, activities: &[Activity]) -> StorageResult<()> {
        (**self).save(activities)
    }

    fn load(&self) -> Vec<Activity> {
        (**self).load()
    }
}

/// Serializes the collection into its canonical JSON array payload.
pub(crate) fn encode_collection(activities: &[Activity]) -> StorageResult<String> {
    Ok(serde_json::to_string(activities)?)
}

/// Decodes a stored payload, rejecting records that violate model
/// invariants. Callers map the error into their empty-collection recovery.
pub(crate) fn decode_collection(payload: &str) -> Result<Vec<Activity>, String> {
    let activities: Vec<Activity> =
        serde_json::from_str(payload).map_err(|err| err.to_string())?;

    for activity in &activities {
        activity
            .validate()
            .map_err(|err| format!("record {}: {err}", activity.id))?;
    }

    Ok(activities)
}
