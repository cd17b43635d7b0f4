//! Firmware upload over `scp`.

use std::path::Path;
use std::process::Command;

use tracing::info;

use crate::domain::error::{GitInfoError, Result};

/// Environment variable holding the upload destination.
pub const UPLOAD_PORT_ENV: &str = "UPLOAD_PORT";

/// `scp <local> <remote>`.
pub fn scp_command(local: &Path, remote: &str) -> Command {
    let mut cmd = Command::new("scp");
    cmd.arg(local).arg(remote);
    cmd
}

/// Copy `local` to `remote` and wait for `scp` to finish.
pub fn upload(local: &Path, remote: &str) -> Result<()> {
    let mut cmd = scp_command(local, remote);
    info!(local = %local.display(), remote, "uploading firmware image");

    let status = cmd
        .status()
        .map_err(|e| GitInfoError::Upload(format!("failed to run scp: {e}")))?;
    if !status.success() {
        return Err(GitInfoError::Upload(format!(
            "scp {} {} exited with {status}",
            local.display(),
            remote
        )));
    }
    Ok(())
}

/// Program and arguments of `cmd`, for logs and tests.
pub fn describe(cmd: &Command) -> Vec<String> {
    std::iter::once(cmd.get_program())
        .chain(cmd.get_args())
        .map(|s| s.to_string_lossy().into_owned())
        .collect()
}
