//! Diff engine
//!
//! Turns a change event into either a copy plan for the running
//! container or a rebuild signal. Decision order matters: a modified
//! build-definition file invalidates every snapshot-based shortcut,
//! so it is checked before anything else.

use std::collections::HashMap;
use std::path::PathBuf;

use tracing::{debug, warn};

use buildsync_fs::{mod_time, to_absolute};

use crate::backend::BuilderBackend;
use crate::error::Result;
use crate::events::ChangeSet;
use crate::project::Project;
use crate::sync::state::{SyncMap, SyncState};

/// Outcome of a diff request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncPlan {
    /// No incremental sync is possible; the caller must run a full
    /// rebuild and perform no copying.
    Rebuild,
    /// Copy each source file to its destinations inside the running
    /// container.
    Copy {
        to_copy: HashMap<PathBuf, Vec<PathBuf>>,
        /// Always empty in the current design: deletions force a
        /// rebuild instead of being synced.
        to_delete: HashMap<PathBuf, Vec<PathBuf>>,
    },
}

impl SyncPlan {
    fn copy(to_copy: HashMap<PathBuf, Vec<PathBuf>>) -> Self {
        Self::Copy {
            to_copy,
            to_delete: HashMap::new(),
        }
    }
}

/// Compute and store the initial sync-map baseline for a project.
///
/// Subsequent [`sync_diff`] calls for the same project diff against
/// this snapshot until a recomputation replaces it.
pub fn init_sync(
    state: &mut SyncState,
    project: &Project,
    backend: &dyn BuilderBackend,
) -> Result<()> {
    let map = backend.compute_sync_map()?;
    state.initialize(project.key(), map);
    Ok(())
}

/// Plan the response to a change event.
///
/// Returns [`SyncPlan::Rebuild`] when a build-definition file changed
/// or when files were deleted. Otherwise tries the direct fast path
/// (every modified file already tracked as a verbatim copy), and
/// falls back to recomputing the sync map and diffing it against the
/// cached baseline.
///
/// Hard errors (stat failures, backend failures) abort the call and
/// leave the cached baseline untouched.
pub fn sync_diff(
    state: &mut SyncState,
    project: &Project,
    backend: &dyn BuilderBackend,
    changes: &ChangeSet,
) -> Result<SyncPlan> {
    let build_files = backend.build_definition_files();
    for path in &changes.modified {
        let path = to_absolute(path)?;
        if build_files.contains(&path) {
            debug!(path = %path.display(), "build definition changed, forcing rebuild");
            return Ok(SyncPlan::Rebuild);
        }
    }

    if !changes.deleted.is_empty() {
        warn!(
            count = changes.deleted.len(),
            "deletions are not supported by incremental sync, forcing rebuild"
        );
        return Ok(SyncPlan::Rebuild);
    }

    let key = project.key();

    // Fast path only applies when the batch is purely modifications.
    if changes.added.is_empty()
        && let Some(plan) = direct_fast_path(state.get_mut(&key), &changes.modified)?
    {
        return Ok(plan);
    }

    // Something in the batch needs the build step; recompute the
    // authoritative map and diff it against the cached baseline.
    let next = backend.compute_sync_map()?;

    let current = state.get(&key);
    let mut to_copy = HashMap::new();
    for (path, entry) in &next {
        match current.get(path) {
            Some(prev) if prev.mod_time == entry.mod_time => {}
            _ => {
                // New file, or an existing file with a new mod time.
                to_copy.insert(path.clone(), entry.destinations.clone());
            }
        }
    }
    debug!(
        tracked = next.len(),
        to_copy = to_copy.len(),
        "recomputed sync map"
    );

    state.initialize(key, next);
    Ok(SyncPlan::copy(to_copy))
}

/// Try to satisfy the batch purely from cached direct entries.
///
/// Every modified file must be tracked with `direct == true`; one
/// unknown or generated file disqualifies the whole batch. Matched
/// entries get their cached mod time refreshed from disk so that a
/// later recomputation diff sees them as already current.
fn direct_fast_path(
    map: Option<&mut SyncMap>,
    modified: &[PathBuf],
) -> Result<Option<SyncPlan>> {
    let Some(map) = map else {
        // No baseline yet; only a trivially empty batch matches.
        return Ok(modified
            .is_empty()
            .then(|| SyncPlan::copy(HashMap::new())));
    };

    let mut matches = HashMap::new();
    for path in modified {
        let path = to_absolute(path)?;
        let Some(entry) = map.get_mut(&path) else {
            break;
        };
        if !entry.direct {
            break;
        }
        matches.insert(path.clone(), entry.destinations.clone());
        entry.mod_time = mod_time(&path)?;
    }

    if matches.len() == modified.len() {
        Ok(Some(SyncPlan::copy(matches)))
    } else {
        Ok(None)
    }
}
