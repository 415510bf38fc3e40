//! Incremental sync planning core for buildsync
//!
//! Given a changed-files event for a source workspace, the planner
//! decides whether the change can be satisfied by copying files into
//! a running container or whether the image must be rebuilt. It keeps
//! a per-project snapshot of the authoritative file-to-destination
//! mapping and, when a rebuild recomputes that mapping, diffs the new
//! snapshot against the old one to produce a minimal copy set.
//!
//! The build tool itself is behind the [`BuilderBackend`] seam; this
//! crate never spawns processes or copies files.

pub mod backend;
pub mod error;
pub mod events;
pub mod project;
pub mod sync;

pub use backend::BuilderBackend;
pub use error::{Error, Result};
pub use events::ChangeSet;
pub use project::{BuildProfile, Project, ProjectKey};
pub use sync::{SyncEntry, SyncMap, SyncPlan, SyncState, init_sync, sync_diff};
