//! Error types for buildsync-builder

use std::path::PathBuf;

/// Result type for buildsync-builder operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while talking to a build tool
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Workspace contains neither a Maven nor a Gradle build
    #[error("Unable to determine build tool for {workspace}: no pom.xml or Gradle build script found")]
    UnknownBuilder { workspace: PathBuf },

    /// Build tool process could not be spawned
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Build tool exited with non-zero status
    #[error("Build tool failed (exit code {code}): {stderr}")]
    CommandFailed {
        /// Exit code from the subprocess
        code: i32,
        /// Captured stderr output
        stderr: String,
    },

    /// Sync-map marker not found in build tool output
    #[error("No sync map marker found in build tool output")]
    MissingMarker,

    /// Payload after the marker was not valid JSON
    #[error("Failed to parse sync map payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),

    /// Filesystem error while capturing source mod times
    #[error(transparent)]
    Fs(#[from] buildsync_fs::Error),
}
