//! Child process plumbing shared by compose and script execution.

use crate::error::Result;
use std::fs::OpenOptions;
use std::path::Path;
use std::process::{ExitStatus, Stdio};

/// Child stdout destination in quiet mode, in the invocation directory.
pub const QUIET_STDOUT_FILE: &str = "boxer_stdout.txt";

/// Child stderr destination in quiet mode, in the invocation directory.
pub const QUIET_STDERR_FILE: &str = "boxer_stderr.txt";

/// Stdio for a child process: inherited, or appended to the quiet-mode log
/// files so a full run stays inspectable afterwards.
pub(crate) fn child_stdio(quiet: bool) -> std::io::Result<(Stdio, Stdio)> {
    if !quiet {
        return Ok((Stdio::inherit(), Stdio::inherit()));
    }
    let stdout = OpenOptions::new()
        .create(true)
        .append(true)
        .open(QUIET_STDOUT_FILE)?;
    let stderr = OpenOptions::new()
        .create(true)
        .append(true)
        .open(QUIET_STDERR_FILE)?;
    Ok((Stdio::from(stdout), Stdio::from(stderr)))
}

/// Run a lifecycle shell script with `dir` as the working directory and
/// wait for it to finish. The caller decides what a non-zero status means.
pub async fn run_script(dir: &Path, script: &str, quiet: bool) -> Result<ExitStatus> {
    let (stdout, stderr) = child_stdio(quiet)?;
    tracing::debug!("running /bin/bash {} in {}", script, dir.display());
    let status = tokio::process::Command::new("/bin/bash")
        .arg(script)
        .current_dir(dir)
        .stdin(Stdio::inherit())
        .stdout(stdout)
        .stderr(stderr)
        .status()
        .await?;
    Ok(status)
}
