//! Build-tool backends for buildsync
//!
//! Implements the [`buildsync_core::BuilderBackend`] seam for Maven
//! and Gradle workspaces: detecting which tool owns a workspace,
//! invoking its sync-map plugin goal as a subprocess, and scraping
//! the authoritative sync map from the tool's stdout.
//!
//! The diff core never depends on the tools' textual quirks; if a
//! plugin's output format changes, only this crate moves.

pub mod detect;
pub mod error;
pub mod gradle;
pub mod logging;
pub mod maven;
pub mod output;
pub mod subprocess;

pub use detect::{BuilderKind, backend_for, detect};
pub use error::{Error, Result};
pub use gradle::GradleBackend;
pub use maven::MavenBackend;
