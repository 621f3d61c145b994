use miette::Diagnostic;
use std::io;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Group directory not found: {0}")]
    #[diagnostic(
        code(boxer::group::not_found),
        help("Create the group first with `boxer -g <name> init <container>...`")
    )]
    GroupNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("'{command}' failed with exit code {exit_code}")]
    #[diagnostic(
        code(boxer::command::failed),
        help("Check that Docker is running with `docker ps`")
    )]
    CommandFailed { command: String, exit_code: i32 },

    #[error("Script '{script}' in container '{container}' exited with code {exit_code}")]
    #[diagnostic(code(boxer::script::failed))]
    ScriptFailed {
        script: String,
        container: String,
        exit_code: i32,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Exit code to surface as the process exit code, for failures of
    /// external commands and lifecycle scripts. The child's own stderr is
    /// the user feedback in these cases.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Error::CommandFailed { exit_code, .. } => Some(*exit_code),
            Error::ScriptFailed { exit_code, .. } => Some(*exit_code),
            _ => None,
        }
    }

    /// Returns a helpful suggestion for resolving this error, if available.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Error::GroupNotFound(dir) => Some(format!(
                "The directory '{}' does not exist. Create the group with `boxer -g <name> init <container>...`",
                dir
            )),
            Error::Config(_) => Some(
                "Run `boxer --help` for the expected arguments".to_string(),
            ),
            Error::CommandFailed { .. } => Some(
                "Check that Docker is running: docker ps".to_string(),
            ),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_failure_carries_exit_code() {
        let err = Error::CommandFailed {
            command: "docker-compose up".to_string(),
            exit_code: 17,
        };
        assert_eq!(err.exit_code(), Some(17));
    }

    #[test]
    fn script_failure_carries_exit_code() {
        let err = Error::ScriptFailed {
            script: "exec-2.sh".to_string(),
            container: "db".to_string(),
            exit_code: 3,
        };
        assert_eq!(err.exit_code(), Some(3));
    }

    #[test]
    fn config_error_has_no_exit_code_override() {
        let err = Error::Config("missing group name".to_string());
        assert_eq!(err.exit_code(), None);
        assert!(err.suggestion().is_some());
    }
}
