//! SQLite-backed activity storage.
//!
//! # Responsibility
//! - Persist the serialized collection under one key-value row.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Writes replace the row for `STORAGE_KEY` in a single statement.
//! - Reads fall back to an empty collection on any failure.

use super::{decode_collection, encode_collection, ActivityStorage, StorageResult, STORAGE_KEY};
use crate::model::activity::Activity;
use log::{info, warn};
use rusqlite::{params, Connection, OptionalExtension};
use std::time::Instant;

/// Key-value SQLite adapter over a bootstrapped connection.
pub struct SqliteStorage<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteStorage<'conn> {
    /// Wraps a connection produced by `db::open_db` or
    /// `db::open_db_in_memory`.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn read_payload(&self) -> rusqlite::Result<Option<String>> {
        self.conn
            .query_row(
                "SELECT value FROM storage WHERE key = ?1;",
                [STORAGE_KEY],
                |row| row.get(0),
            )
            .optional()
    }
}

impl ActivityStorage for SqliteStorage<'_> {
    fn save(&self, activities: &[Activity]) -> StorageResult<()> {
        let started_at = Instant::now();
        let payload = encode_collection(activities)?;

        self.conn.execute(
            "INSERT INTO storage (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![STORAGE_KEY, payload],
        )?;

        info!(
            "event=storage_save module=storage status=ok backend=sqlite count={} duration_ms={}",
            activities.len(),
            started_at.elapsed().as_millis()
        );
        Ok(())
    }

    fn load(&self) -> Vec<Activity> {
        let payload = match self.read_payload() {
            Ok(Some(payload)) => payload,
            Ok(None) => {
                info!("event=storage_load module=storage status=ok backend=sqlite count=0 source=empty");
                return Vec::new();
            }
            Err(err) => {
                warn!(
                    "event=storage_load module=storage status=error backend=sqlite recovered=empty error={err}"
                );
                return Vec::new();
            }
        };

        match decode_collection(&payload) {
            Ok(activities) => {
                info!(
                    "event=storage_load module=storage status=ok backend=sqlite count={}",
                    activities.len()
                );
                activities
            }
            Err(reason) => {
                warn!(
                    "event=storage_load module=storage status=error backend=sqlite recovered=empty error={reason}"
                );
                Vec::new()
            }
        }
    }
}
