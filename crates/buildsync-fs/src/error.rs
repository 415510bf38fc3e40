//! Error types for buildsync-fs

use std::path::PathBuf;

/// Result type for buildsync-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in buildsync-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to resolve absolute path for {path}: {source}")]
    PathResolution {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read metadata for {path}: {source}")]
    Stat {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn resolution(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::PathResolution {
            path: path.into(),
            source,
        }
    }

    pub fn stat(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Stat {
            path: path.into(),
            source,
        }
    }
}
