//! Activity collection ownership and use-case operations.
//!
//! # Responsibility
//! - Hold the single in-memory source of truth for activities.
//! - Keep callers decoupled from storage details.

pub mod activity_store;
