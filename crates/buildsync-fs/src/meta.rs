//! File metadata lookup

use std::path::Path;
use std::time::SystemTime;

use crate::error::{Error, Result};

/// Read the last-modification time of a file.
///
/// The planner compares these timestamps for exact equality; any
/// failure to stat a tracked source aborts the diff that needed it.
pub fn mod_time(path: &Path) -> Result<SystemTime> {
    let metadata = std::fs::metadata(path).map_err(|e| Error::stat(path, e))?;
    metadata.modified().map_err(|e| Error::stat(path, e))
}
