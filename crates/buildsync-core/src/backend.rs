//! Builder backend seam
//!
//! The diff engine depends on the external build tool for exactly two
//! things: the list of build-definition files and a freshly computed
//! sync map. Both come from the same build-tool plugin, so they live
//! on one trait. The `buildsync-builder` crate provides the Maven and
//! Gradle implementations; tests stub it in memory.

use std::path::PathBuf;

use crate::error::Result;
use crate::sync::SyncMap;

/// External build-tool capability, bound to one project.
pub trait BuilderBackend {
    /// Absolute paths of the project's build-definition files.
    ///
    /// Modifying any of these invalidates incremental sync entirely
    /// and forces a full rebuild. Must be stable for the duration of
    /// a single diff call.
    fn build_definition_files(&self) -> Vec<PathBuf>;

    /// Synchronously produce a fresh authoritative sync map.
    fn compute_sync_map(&self) -> Result<SyncMap>;
}
