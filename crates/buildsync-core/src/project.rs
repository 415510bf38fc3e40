//! Project identity
//!
//! One sync session tracks one workspace built with one build
//! configuration. The pair is collapsed into a [`ProjectKey`] that
//! keys the snapshot store.

use std::path::{Path, PathBuf};

/// Build configuration identity for one container image.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildProfile {
    /// Sub-project/module selector passed to the build tool, for
    /// multi-module workspaces.
    pub module: Option<String>,
    /// Extra flags forwarded to every build tool invocation.
    pub flags: Vec<String>,
}

impl BuildProfile {
    pub fn with_module(module: impl Into<String>) -> Self {
        Self {
            module: Some(module.into()),
            ..Self::default()
        }
    }
}

/// One workspace + build configuration kept in sync.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub workspace: PathBuf,
    pub profile: BuildProfile,
}

impl Project {
    pub fn new(workspace: impl Into<PathBuf>, profile: BuildProfile) -> Self {
        Self {
            workspace: workspace.into(),
            profile,
        }
    }

    /// Derive the key identifying this sync session.
    ///
    /// Deterministic over workspace path and profile identity, so two
    /// images built from the same workspace with different modules or
    /// flags track independent snapshots.
    pub fn key(&self) -> ProjectKey {
        let mut key = self.workspace.to_string_lossy().into_owned();
        if let Some(module) = &self.profile.module {
            key.push('#');
            key.push_str(module);
        }
        for flag in &self.profile.flags {
            key.push('#');
            key.push_str(flag);
        }
        ProjectKey(key)
    }

    pub fn workspace(&self) -> &Path {
        &self.workspace
    }
}

/// Unique identifier for one workspace + build-config sync session.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectKey(String);

impl std::fmt::Display for ProjectKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
