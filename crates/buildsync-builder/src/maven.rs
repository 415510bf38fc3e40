//! Maven backend
//!
//! Invokes the sync-map goal of the container build plugin through
//! `mvn`, preferring the workspace's `mvnw` wrapper when present.

use std::path::PathBuf;
use std::process::Command;

use buildsync_core::{BuilderBackend, Project, SyncMap};
use buildsync_fs::to_absolute;

use crate::output;
use crate::subprocess;

/// Build-definition files for a Maven workspace.
pub(crate) const BUILD_FILES: &[&str] = &["pom.xml"];

pub struct MavenBackend {
    project: Project,
}

impl MavenBackend {
    pub fn new(project: Project) -> Self {
        Self { project }
    }

    fn executable(&self) -> PathBuf {
        let wrapper = self.project.workspace().join("mvnw");
        if wrapper.is_file() {
            wrapper
        } else {
            PathBuf::from("mvn")
        }
    }

    pub(crate) fn sync_map_command(&self) -> Command {
        let mut cmd = Command::new(self.executable());
        cmd.current_dir(self.project.workspace())
            .arg("--batch-mode")
            .arg("--quiet")
            .args(&self.project.profile.flags);
        if let Some(module) = &self.project.profile.module {
            cmd.arg("--projects").arg(module).arg("--also-make");
        }
        cmd.arg("buildsync:sync-map");
        cmd
    }

    fn try_compute(&self) -> crate::error::Result<SyncMap> {
        let stdout = subprocess::run_capture(self.sync_map_command())?;
        output::parse_sync_map(&stdout)
    }
}

impl BuilderBackend for MavenBackend {
    fn build_definition_files(&self) -> Vec<PathBuf> {
        BUILD_FILES
            .iter()
            .map(|file| {
                let path = self.project.workspace().join(file);
                to_absolute(&path).unwrap_or(path)
            })
            .collect()
    }

    fn compute_sync_map(&self) -> buildsync_core::Result<SyncMap> {
        self.try_compute().map_err(buildsync_core::Error::recompute)
    }
}
