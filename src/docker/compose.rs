//! docker-compose CLI client.
//!
//! The single place where the compose binary is invoked. Each operation is
//! scoped to a compose project namespace (`-p`) and a working directory, so
//! build-time and run-time environments of the same group never collide.

use super::process::child_stdio;
use crate::error::{Error, Result};
use std::path::Path;
use std::process::Stdio;

/// Exit code reported when the compose binary itself cannot be launched.
/// Matches the shell convention for command-not-found.
const LAUNCH_FAILURE_CODE: i32 = 127;

/// Client for docker-compose invocations.
#[derive(Debug, Clone)]
pub struct ComposeClient {
    program: String,
    quiet: bool,
}

impl ComposeClient {
    pub fn new(quiet: bool) -> Self {
        Self::with_program("docker-compose", quiet)
    }

    /// Use a different compose binary (or a stand-in, in tests).
    pub fn with_program(program: impl Into<String>, quiet: bool) -> Self {
        Self {
            program: program.into(),
            quiet,
        }
    }

    /// Arguments for `down --volumes` in the given project namespace.
    pub fn down_args(project: &str) -> Vec<String> {
        vec![
            "-p".to_string(),
            project.to_string(),
            "down".to_string(),
            "--volumes".to_string(),
        ]
    }

    /// Arguments for `up --build` against a generated compose file.
    pub fn up_args(project: &str, file: &str, detached: bool, quiet: bool) -> Vec<String> {
        let mut args = vec![
            "-p".to_string(),
            project.to_string(),
            "-f".to_string(),
            file.to_string(),
            "up".to_string(),
        ];
        if detached {
            args.push("--detach".to_string());
        }
        args.push("--build".to_string());
        if quiet {
            args.push("--quiet-pull".to_string());
        }
        args
    }

    /// Arguments for a non-interactive `exec` in a running container.
    pub fn exec_args(project: &str, container: &str, command: &[String]) -> Vec<String> {
        let mut args = vec![
            "-p".to_string(),
            project.to_string(),
            "exec".to_string(),
            "-T".to_string(),
            container.to_string(),
        ];
        args.extend(command.iter().cloned());
        args
    }

    /// Tear down a project namespace, removing volumes.
    pub async fn down(&self, dir: &Path, project: &str) -> Result<()> {
        self.run(dir, &Self::down_args(project)).await
    }

    /// Bring a project namespace up from a generated compose file.
    pub async fn up(&self, dir: &Path, project: &str, file: &str, detached: bool) -> Result<()> {
        self.run(dir, &Self::up_args(project, file, detached, self.quiet))
            .await
    }

    /// Run a command inside a running container of a project namespace.
    pub async fn exec(
        &self,
        dir: &Path,
        project: &str,
        container: &str,
        command: &[String],
    ) -> Result<()> {
        self.run(dir, &Self::exec_args(project, container, command))
            .await
    }

    /// Execute one compose invocation, blocking until it exits.
    ///
    /// A launch failure (binary missing, permission denied) is reported as
    /// [`Error::CommandFailed`] with exit code 127 rather than an IO error,
    /// so the pipeline surfaces it the same way as any failing step.
    async fn run(&self, dir: &Path, args: &[String]) -> Result<()> {
        let cmd_display = format!("{} {}", self.program, args.join(" "));
        tracing::info!("executing [{}] in {}", cmd_display, dir.display());

        let (stdout, stderr) = child_stdio(self.quiet)?;
        let status = tokio::process::Command::new(&self.program)
            .args(args)
            .current_dir(dir)
            .stdin(Stdio::inherit())
            .stdout(stdout)
            .stderr(stderr)
            .status()
            .await;

        let status = match status {
            Ok(status) => status,
            Err(e) => {
                tracing::warn!("failed to launch [{}]: {}", cmd_display, e);
                return Err(Error::CommandFailed {
                    command: cmd_display,
                    exit_code: LAUNCH_FAILURE_CODE,
                });
            }
        };

        if status.success() {
            Ok(())
        } else {
            Err(Error::CommandFailed {
                command: cmd_display,
                exit_code: status.code().unwrap_or(1),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn down_args_scope_project_and_remove_volumes() {
        assert_eq!(
            ComposeClient::down_args("builddemo"),
            ["-p", "builddemo", "down", "--volumes"]
        );
    }

    #[test]
    fn up_args_detached() {
        assert_eq!(
            ComposeClient::up_args("builddemo", "docker-compose.build.yml", true, false),
            [
                "-p",
                "builddemo",
                "-f",
                "docker-compose.build.yml",
                "up",
                "--detach",
                "--build"
            ]
        );
    }

    #[test]
    fn up_args_attached_quiet() {
        assert_eq!(
            ComposeClient::up_args("demo", "docker-compose.run.yml", false, true),
            [
                "-p",
                "demo",
                "-f",
                "docker-compose.run.yml",
                "up",
                "--build",
                "--quiet-pull"
            ]
        );
    }

    #[test]
    fn exec_args_append_command_verbatim() {
        let command = vec!["pytest".to_string(), "-k".to_string(), "smoke".to_string()];
        assert_eq!(
            ComposeClient::exec_args("demo", "api", &command),
            ["-p", "demo", "exec", "-T", "api", "pytest", "-k", "smoke"]
        );
    }

    #[tokio::test]
    async fn launch_failure_maps_to_exit_code_127() {
        let tmp = tempdir().unwrap();
        let client = ComposeClient::with_program("boxer-test-no-such-binary", false);
        let err = client.down(tmp.path(), "demo").await.unwrap_err();
        match err {
            Error::CommandFailed { exit_code, .. } => assert_eq!(exit_code, 127),
            other => panic!("expected CommandFailed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn nonzero_exit_is_surfaced() {
        let tmp = tempdir().unwrap();
        // `false` ignores its arguments and exits 1.
        let client = ComposeClient::with_program("false", false);
        let err = client.down(tmp.path(), "demo").await.unwrap_err();
        match err {
            Error::CommandFailed { exit_code, .. } => assert_eq!(exit_code, 1),
            other => panic!("expected CommandFailed, got {other:?}"),
        }
    }
}
