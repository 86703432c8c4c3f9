//! Version check with timeout.

use crate::VersionError;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;

/// Run `<path> --version` and return its output.
///
/// The process is killed if it does not finish within `limit`.
///
/// # Returns
///
/// The version text (stdout, or stderr when stdout is empty), or:
/// - `Timeout` if the command outlives `limit`
/// - `PermissionDenied` if the executable cannot be run
/// - `IoError` for other launch failures or a non-zero exit
/// - `ParseFailed` if the output is not valid UTF-8
pub(crate) async fn check_version(path: &Path, limit: Duration) -> Result<String, VersionError> {
    let mut command = Command::new(path);
    command
        .arg("--version")
        .stdin(Stdio::null())
        .kill_on_drop(true);

    let output = timeout(limit, command.output())
        .await
        .map_err(|_| VersionError::Timeout)?
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::PermissionDenied {
                VersionError::PermissionDenied
            } else {
                VersionError::IoError
            }
        })?;

    if !output.status.success() {
        return Err(VersionError::IoError);
    }

    let out = if !output.stdout.is_empty() {
        output.stdout
    } else {
        output.stderr
    };

    String::from_utf8(out).map_err(|_| VersionError::ParseFailed)
}
