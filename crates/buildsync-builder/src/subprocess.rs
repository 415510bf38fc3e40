//! Build-tool subprocess execution
//!
//! One synchronous invocation per call; any timeout policy belongs
//! to the caller.

use std::process::Command;

use tracing::debug;

use crate::error::{Error, Result};

/// Run a build-tool command and return its captured stdout.
///
/// Non-zero exit maps to [`Error::CommandFailed`] with the captured
/// stderr attached.
pub fn run_capture(mut cmd: Command) -> Result<String> {
    debug!(command = ?cmd, "running build tool");
    let output = cmd.output().map_err(Error::Io)?;

    if output.status.success() {
        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        let code = output.status.code().unwrap_or(-1);
        Err(Error::CommandFailed { code, stderr })
    }
}
