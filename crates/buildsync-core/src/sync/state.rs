//! Sync-map snapshot store
//!
//! The store is a plain value owned by the caller's build session,
//! not a process global, so multiple projects (and tests) can hold
//! independent state.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::LazyLock;
use std::time::SystemTime;

use crate::project::ProjectKey;

/// One tracked source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncEntry {
    /// Destination paths inside the container image. Never empty.
    pub destinations: Vec<PathBuf>,
    /// Source mod time observed when the entry was captured.
    pub mod_time: SystemTime,
    /// `true` for files copied byte-for-byte to their destination;
    /// `false` for sources whose destination content is produced by
    /// the build step.
    pub direct: bool,
}

impl SyncEntry {
    pub fn direct(destinations: Vec<PathBuf>, mod_time: SystemTime) -> Self {
        Self {
            destinations,
            mod_time,
            direct: true,
        }
    }

    pub fn generated(destinations: Vec<PathBuf>, mod_time: SystemTime) -> Self {
        Self {
            destinations,
            mod_time,
            direct: false,
        }
    }
}

/// Snapshot of everything that would be synced right now for one
/// project, keyed by absolute source path.
pub type SyncMap = HashMap<PathBuf, SyncEntry>;

static EMPTY: LazyLock<SyncMap> = LazyLock::new(SyncMap::new);

/// Latest sync-map snapshot per project.
///
/// Entries are created by [`SyncState::initialize`], overwritten on
/// every recomputation and never removed; the store lives as long as
/// the session that owns it. Nothing is persisted.
#[derive(Debug, Default)]
pub struct SyncState {
    maps: HashMap<ProjectKey, SyncMap>,
}

impl SyncState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the snapshot for a project, replacing any previous one.
    pub fn initialize(&mut self, key: ProjectKey, map: SyncMap) {
        self.maps.insert(key, map);
    }

    /// Current snapshot for a project.
    ///
    /// A project without a baseline reads as an empty map; absence is
    /// a valid state, not an error.
    pub fn get(&self, key: &ProjectKey) -> &SyncMap {
        self.maps.get(key).unwrap_or(&EMPTY)
    }

    pub(crate) fn get_mut(&mut self, key: &ProjectKey) -> Option<&mut SyncMap> {
        self.maps.get_mut(key)
    }
}
