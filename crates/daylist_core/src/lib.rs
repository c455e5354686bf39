//! Core domain logic for daylist, a local daily-activity organizer.
//! This crate is the single source of truth for collection invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod storage;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::activity::{
    sample_drafts, Activity, ActivityId, ActivityValidationError, NewActivity, Priority,
};
pub use storage::memory::MemoryStorage;
pub use storage::sqlite::SqliteStorage;
pub use storage::{ActivityStorage, StorageError, StorageResult};
pub use store::activity_store::{
    ActivityFilter, ActivityStore, StoreError, StoreResult, Summary,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
