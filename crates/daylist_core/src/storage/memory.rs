//! In-memory activity storage for tests and ephemeral sessions.

use super::{decode_collection, encode_collection, ActivityStorage, StorageResult};
use crate::model::activity::Activity;
use log::warn;
use std::cell::RefCell;

/// Holds the encoded payload in memory, exercising the same codec as the
/// durable adapters.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    payload: RefCell<Option<String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from a raw payload, e.g. to simulate previously stored state.
    pub fn with_payload(payload: impl Into<String>) -> Self {
        Self {
            payload: RefCell::new(Some(payload.into())),
        }
    }

    /// Returns the currently stored payload, if any.
    pub fn payload(&self) -> Option<String> {
        self.payload.borrow().clone()
    }
}

impl ActivityStorage for MemoryStorage {
    fn save(&self, activities: &[Activity]) -> StorageResult<()> {
        let payload = encode_collection(activities)?;
        *self.payload.borrow_mut() = Some(payload);
        Ok(())
    }

    fn load(&self) -> Vec<Activity> {
        let Some(payload) = self.payload.borrow().clone() else {
            return Vec::new();
        };

        match decode_collection(&payload) {
            Ok(activities) => activities,
            Err(reason) => {
                warn!(
                    "event=storage_load module=storage status=error backend=memory recovered=empty error={reason}"
                );
                Vec::new()
            }
        }
    }
}
