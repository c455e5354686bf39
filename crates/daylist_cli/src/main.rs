//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `daylist_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use daylist_core::{ActivityStore, MemoryStorage};

fn main() {
    println!("daylist_core ping={}", daylist_core::ping());
    println!("daylist_core version={}", daylist_core::core_version());

    // An empty in-memory store keeps the probe deterministic while still
    // exercising the store wiring end to end.
    let store = ActivityStore::open(MemoryStorage::new());
    let summary = store.summary();
    println!(
        "daylist_core summary total={} completed={} pending={}",
        summary.total, summary.completed, summary.pending
    );
}
