//! Gradle backend
//!
//! Invokes the sync-map task of the container build plugin through
//! `gradle`, preferring the workspace's `gradlew` wrapper when
//! present.

use std::path::PathBuf;
use std::process::Command;

use buildsync_core::{BuilderBackend, Project, SyncMap};
use buildsync_fs::to_absolute;

use crate::output;
use crate::subprocess;

/// Build-definition files for a Gradle workspace.
pub(crate) const BUILD_FILES: &[&str] = &[
    "build.gradle",
    "build.gradle.kts",
    "settings.gradle",
    "settings.gradle.kts",
    "gradle.properties",
];

pub struct GradleBackend {
    project: Project,
}

impl GradleBackend {
    pub fn new(project: Project) -> Self {
        Self { project }
    }

    fn executable(&self) -> PathBuf {
        let wrapper = self.project.workspace().join("gradlew");
        if wrapper.is_file() {
            wrapper
        } else {
            PathBuf::from("gradle")
        }
    }

    /// Task path for the sync-map task, scoped to the configured
    /// sub-project when one is set.
    fn task(&self) -> String {
        match &self.project.profile.module {
            Some(module) => format!(":{module}:syncMap"),
            None => ":syncMap".to_string(),
        }
    }

    pub(crate) fn sync_map_command(&self) -> Command {
        let mut cmd = Command::new(self.executable());
        cmd.current_dir(self.project.workspace())
            .arg("--quiet")
            .arg("--console=plain")
            .args(&self.project.profile.flags)
            .arg(self.task());
        cmd
    }

    fn try_compute(&self) -> crate::error::Result<SyncMap> {
        let stdout = subprocess::run_capture(self.sync_map_command())?;
        output::parse_sync_map(&stdout)
    }
}

impl BuilderBackend for GradleBackend {
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
