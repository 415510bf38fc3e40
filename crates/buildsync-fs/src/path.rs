//! Absolute-path resolution for change-event entries
//!
//! Sync maps are keyed by absolute paths, so every path coming in
//! from a change event is resolved against the current working
//! directory and lexically cleaned before any comparison. Resolution
//! never touches the filesystem; the paths in a deletion event no
//! longer exist.

use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Resolve a path to absolute, normalized form.
///
/// Already-absolute paths are cleaned in place; relative paths are
/// joined onto the current working directory first. On Windows,
/// `\\?\` verbatim prefixes are stripped so that paths compare equal
/// regardless of how they were produced.
pub fn to_absolute(path: &Path) -> Result<PathBuf> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        let cwd = std::env::current_dir().map_err(|e| Error::resolution(path, e))?;
        cwd.join(path)
    };
    Ok(clean(dunce::simplified(&absolute)))
}

/// Lexically clean a path: drop `.` components and fold `..` into
/// their parent where one exists.
fn clean(path: &Path) -> PathBuf {
    let mut cleaned = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // `..` directly above the root stays at the root
                if !cleaned.pop() && !cleaned.has_root() {
                    cleaned.push(component.as_os_str());
                }
            }
            other => cleaned.push(other.as_os_str()),
        }
    }
    cleaned
}
