//! Build-tool detection
//!
//! The backend is chosen by inspecting the workspace for build
//! scripts, a dispatch concern kept out of the diff core. Maven wins
//! when both tools' files are present.

use std::path::Path;

use buildsync_core::{BuilderBackend, Project};

use crate::error::{Error, Result};
use crate::gradle::{self, GradleBackend};
use crate::maven::{self, MavenBackend};

/// Supported build tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuilderKind {
    Maven,
    Gradle,
}

/// Determine which build tool owns a workspace.
pub fn detect(workspace: &Path) -> Result<BuilderKind> {
    if maven::BUILD_FILES
        .iter()
        .any(|file| workspace.join(file).is_file())
    {
        return Ok(BuilderKind::Maven);
    }
    if gradle::BUILD_FILES
        .iter()
        .any(|file| workspace.join(file).is_file())
    {
        return Ok(BuilderKind::Gradle);
    }
    Err(Error::UnknownBuilder {
        workspace: workspace.to_path_buf(),
    })
}

/// Construct the backend for a project by workspace inspection.
pub fn backend_for(project: Project) -> Result<Box<dyn BuilderBackend>> {
    match detect(project.workspace())? {
        BuilderKind::Maven => Ok(Box::new(MavenBackend::new(project))),
        BuilderKind::Gradle => Ok(Box::new(GradleBackend::new(project))),
    }
}
