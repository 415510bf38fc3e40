//! Sync-map extraction from build-tool output
//!
//! The sync-map plugin goal prints a marker line `BEGIN SYNCMAP JSON`
//! (newer plugin versions append `: SYNCMAP/1`) followed by a
//! single-line JSON object listing direct and generated entries.
//! Plugin output is not strictly escaped, so literal backslashes are
//! doubled before parsing or Windows paths would break the payload.

use std::path::PathBuf;
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use buildsync_core::{SyncEntry, SyncMap};
use buildsync_fs::mod_time;

use crate::error::{Error, Result};

static MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"BEGIN SYNCMAP JSON(?:: SYNCMAP/1)?\r?\n(\{.*\})").expect("static marker pattern")
});

/// Wire format printed by the sync-map plugin goal.
#[derive(Debug, Deserialize)]
struct JsonSyncMap {
    #[serde(default)]
    direct: Vec<JsonSyncEntry>,
    #[serde(default)]
    generated: Vec<JsonSyncEntry>,
}

#[derive(Debug, Deserialize)]
struct JsonSyncEntry {
    src: PathBuf,
    dest: PathBuf,
}

/// Extract a sync map from raw build-tool stdout.
///
/// Every listed source is stat'ed to capture its current mod time;
/// a missing source fails the whole extraction.
pub fn parse_sync_map(stdout: &str) -> Result<SyncMap> {
    let captures = MARKER.captures(stdout).ok_or(Error::MissingMarker)?;
    let payload = captures[1].replace('\\', "\\\\");
    let parsed: JsonSyncMap = serde_json::from_str(&payload)?;

    let mut map = SyncMap::new();
    for entry in &parsed.direct {
        let time = mod_time(&entry.src)?;
        map.insert(
            entry.src.clone(),
            SyncEntry::direct(vec![entry.dest.clone()], time),
        );
    }
    for entry in &parsed.generated {
        let time = mod_time(&entry.src)?;
        map.insert(
            entry.src.clone(),
            SyncEntry::generated(vec![entry.dest.clone()], time),
        );
    }
    Ok(map)
}
