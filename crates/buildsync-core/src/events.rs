//! Change events from the file watcher
//!
//! Paths may arrive relative to the watcher's working directory; the
//! diff engine resolves them to absolute form before any comparison.

use std::path::PathBuf;

/// One batch of filesystem changes observed in a workspace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    pub modified: Vec<PathBuf>,
    pub added: Vec<PathBuf>,
    pub deleted: Vec<PathBuf>,
}

impl ChangeSet {
    /// An event containing only modified paths, the common case for
    /// edit-save loops.
    pub fn modified_only(paths: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        Self {
            modified: paths.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.modified.is_empty() && self.added.is_empty() && self.deleted.is_empty()
    }
}
