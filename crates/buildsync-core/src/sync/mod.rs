//! Sync planning: snapshot store and diff engine
//!
//! [`SyncState`] holds the latest sync-map snapshot per project;
//! [`sync_diff`] turns a change event into either a copy plan or a
//! rebuild signal.

pub mod engine;
pub mod state;

pub use engine::{SyncPlan, init_sync, sync_diff};
pub use state::{SyncEntry, SyncMap, SyncState};
