//! Error types for buildsync-core

/// Result type for buildsync-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in buildsync-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Filesystem error from buildsync-fs
    #[error(transparent)]
    Fs(#[from] buildsync_fs::Error),

    /// External sync-map recomputation failed
    #[error("Sync map recomputation failed: {0}")]
    Recompute(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    /// Wrap a backend failure as a recomputation error.
    pub fn recompute(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Recompute(source.into())
    }
}
