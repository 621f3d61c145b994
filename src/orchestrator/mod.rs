//! The lifecycle pipeline: build, start, stop, exec.
//!
//! Composes the assembler, the script runner and the compose client into
//! the four operations the CLI exposes. Every step is awaited before the
//! next starts and the first failure aborts the remaining steps, carrying
//! the external exit code out to the caller.

use crate::compose::{ComposeAssembler, ComposeKind};
use crate::config::GroupConfig;
use crate::docker::ComposeClient;
use crate::error::Result;
use crate::group::Group;
use crate::output::UserOutput;
use crate::runner::{ScriptPhase, ScriptRunner};

/// Prefix distinguishing the build-time compose project namespace from the
/// run-time one derived from the same group alias.
const BUILD_PROJECT_PREFIX: &str = "build";

pub struct Orchestrator {
    group: Group,
    config: GroupConfig,
    compose: ComposeClient,
    output: Box<dyn UserOutput>,
}

impl Orchestrator {
    pub fn new(group: Group, config: GroupConfig, output: Box<dyn UserOutput>) -> Self {
        let compose = ComposeClient::new(config.quiet);
        Self {
            group,
            config,
            compose,
            output,
        }
    }

    /// Replace the compose client (tests, alternate compose binaries).
    pub fn with_compose_client(mut self, compose: ComposeClient) -> Self {
        self.compose = compose;
        self
    }

    pub fn group(&self) -> &Group {
        &self.group
    }

    /// Compose project namespace for build-time environments.
    pub fn build_project(&self) -> String {
        format!("{}{}", BUILD_PROJECT_PREFIX, self.group.alias())
    }

    /// Compose project namespace for run-time environments.
    pub fn run_project(&self) -> String {
        self.group.alias().to_string()
    }

    /// Build images for the whole group.
    ///
    /// Assembles the build file, tears down any stale build environment,
    /// runs checkout scripts, brings the build environment up detached,
    /// runs the ordered lifecycle scripts, then commit and push scripts,
    /// and finally tears the build environment down. The final teardown
    /// only runs when every earlier step succeeded.
    pub async fn build(&self) -> Result<()> {
        self.group.ensure_exists()?;
        self.assemble(ComposeKind::Build)?;

        let dir = self.group.dir();
        let project = self.build_project();
        let runner = ScriptRunner::new(&self.group, &self.config, &*self.output);

        self.compose.down(dir, &project).await?;
        runner.run_phase(ScriptPhase::Checkout).await?;
        self.compose
            .up(dir, &project, ComposeKind::Build.output_file(), true)
            .await?;
        runner.run_lifecycle().await?;
        runner.run_phase(ScriptPhase::Commit).await?;
        runner.run_phase(ScriptPhase::Push).await?;
        self.compose.down(dir, &project).await?;
        Ok(())
    }

    /// Assemble the run file and bring the run environment up, attached.
    pub async fn start(&self) -> Result<()> {
        self.group.ensure_exists()?;
        self.assemble(ComposeKind::Run)?;
        self.compose
            .up(
                self.group.dir(),
                &self.run_project(),
                ComposeKind::Run.output_file(),
                false,
            )
            .await
    }

    /// Tear down the run environment, removing volumes.
    pub async fn stop(&self) -> Result<()> {
        self.group.ensure_exists()?;
        self.compose
            .down(self.group.dir(), &self.run_project())
            .await
    }

    /// Run a command inside a named running container of the run
    /// environment, surfacing the command's exit code on failure.
    pub async fn exec(&self, container: &str, command: &[String]) -> Result<()> {
        self.group.ensure_exists()?;
        self.compose
            .exec(self.group.dir(), &self.run_project(), container, command)
            .await
    }

    fn assemble(&self, kind: ComposeKind) -> Result<()> {
        let out = ComposeAssembler::new(&self.group, self.config.order).assemble(kind)?;
        self.output
            .success(&format!("Generated [{}]", out.display()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::output::QuietOutput;
    use std::path::Path;

    fn orchestrator_for(name: &str, base: &Path) -> Orchestrator {
        Orchestrator::new(
            Group::new(name, base),
            GroupConfig::default(),
            Box::new(QuietOutput),
        )
    }

    #[test]
    fn build_and_run_projects_never_collide() {
        let orch = orchestrator_for("Demo", Path::new("/work"));
        assert_eq!(orch.run_project(), "demo");
        assert_eq!(orch.build_project(), "builddemo");
        assert_ne!(orch.build_project(), orch.run_project());
    }

    #[tokio::test]
    async fn operations_on_missing_group_fail_without_mutation() {
        let tmp = tempfile::tempdir().unwrap();
        let orch = orchestrator_for("ghost", tmp.path());

        assert!(matches!(
            orch.build().await.unwrap_err(),
            Error::GroupNotFound(_)
        ));
        assert!(matches!(
            orch.start().await.unwrap_err(),
            Error::GroupNotFound(_)
        ));
        assert!(matches!(
            orch.stop().await.unwrap_err(),
            Error::GroupNotFound(_)
        ));
        assert!(matches!(
            orch.exec("api", &["true".to_string()]).await.unwrap_err(),
            Error::GroupNotFound(_)
        ));
        assert!(!orch.group().dir().exists());
    }
}
