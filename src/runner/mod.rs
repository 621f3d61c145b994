//! Ordered execution of per-container lifecycle scripts.
//!
//! The build pipeline runs four script phases. Checkout, commit and push
//! use a fixed file name per container and run in container order. The
//! lifecycle phase (`exec`) additionally supports explicit ordering: a
//! container carries either the default `exec.sh` (order 0) or a numbered
//! `exec-<N>.sh` (order N), and the whole batch runs in ascending order.
//! Execution is strictly sequential and stops at the first non-zero exit.

use crate::config::GroupConfig;
use crate::docker::run_script;
use crate::error::{Error, Result};
use crate::group::{ContainerUnit, Group};
use crate::output::UserOutput;
use std::fs;

/// Default lifecycle script, implicit order 0.
const LIFECYCLE_DEFAULT: &str = "exec.sh";

/// Numbered lifecycle script pattern: `exec-<N>.sh`, N >= 1.
const LIFECYCLE_PREFIX: &str = "exec-";
const LIFECYCLE_SUFFIX: &str = ".sh";

/// The fixed-name script phases of the build pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptPhase {
    Checkout,
    Commit,
    Push,
}

impl ScriptPhase {
    pub fn filename(self) -> &'static str {
        match self {
            ScriptPhase::Checkout => "checkout.sh",
            ScriptPhase::Commit => "commit.sh",
            ScriptPhase::Push => "push.sh",
        }
    }
}

/// One eligible lifecycle script: a container, its order key, and the
/// script file name that produced the key.
#[derive(Debug, Clone)]
pub struct LifecycleStep {
    pub container: ContainerUnit,
    pub order: u32,
    pub script: String,
}

/// Runs script phases for one group.
pub struct ScriptRunner<'a> {
    group: &'a Group,
    config: &'a GroupConfig,
    output: &'a dyn UserOutput,
}

impl<'a> ScriptRunner<'a> {
    pub fn new(group: &'a Group, config: &'a GroupConfig, output: &'a dyn UserOutput) -> Self {
        Self {
            group,
            config,
            output,
        }
    }

    /// Run a fixed-name phase across all containers, in container order.
    /// Containers without the script are skipped.
    pub async fn run_phase(&self, phase: ScriptPhase) -> Result<()> {
        let script = phase.filename();
        for unit in self.group.containers(self.config.order)? {
            if !unit.file(script).is_file() {
                continue;
            }
            self.execute(&unit, script).await?;
        }
        Ok(())
    }

    /// Run the lifecycle scripts of all containers in ascending order.
    pub async fn run_lifecycle(&self) -> Result<()> {
        for step in self.lifecycle_steps()? {
            self.execute(&step.container, &step.script).await?;
        }
        Ok(())
    }

    /// Collect eligible lifecycle scripts, sorted ascending by order key.
    ///
    /// The sort is stable: containers sharing an order key keep their
    /// collection order. Duplicate keys work but make the relative order a
    /// property of container ordering rather than an explicit choice, so
    /// they are reported as a warning.
    pub fn lifecycle_steps(&self) -> Result<Vec<LifecycleStep>> {
        let mut steps = Vec::new();
        for unit in self.group.containers(self.config.order)? {
            if unit.file(LIFECYCLE_DEFAULT).is_file() {
                steps.push(LifecycleStep {
                    container: unit,
                    order: 0,
                    script: LIFECYCLE_DEFAULT.to_string(),
                });
                continue;
            }
            if let Some((order, script)) = find_numbered_script(&unit)? {
                steps.push(LifecycleStep {
                    container: unit,
                    order,
                    script,
                });
            }
        }

        steps.sort_by_key(|step| step.order);
        warn_duplicate_orders(&steps);
        Ok(steps)
    }

    async fn execute(&self, unit: &ContainerUnit, script: &str) -> Result<()> {
        self.output.status(&format!(
            "Running [{}] in {}/",
            script,
            unit.dir().display()
        ));
        let status = run_script(unit.dir(), script, self.config.quiet).await?;
        if status.success() {
            Ok(())
        } else {
            Err(Error::ScriptFailed {
                script: script.to_string(),
                container: unit.name().to_string(),
                exit_code: status.code().unwrap_or(1),
            })
        }
    }
}

/// Find the numbered lifecycle script of a container, if any.
///
/// When more than one `exec-<N>.sh` is present the smallest N wins, so the
/// choice does not depend on directory-listing order.
fn find_numbered_script(unit: &ContainerUnit) -> Result<Option<(u32, String)>> {
    let mut best: Option<(u32, String)> = None;
    for entry in fs::read_dir(unit.dir())? {
        let entry = entry?;
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            continue;
        };
        let Some(order) = name
            .strip_prefix(LIFECYCLE_PREFIX)
            .and_then(|rest| rest.strip_suffix(LIFECYCLE_SUFFIX))
            .and_then(|digits| digits.parse::<u32>().ok())
        else {
            continue;
        };
        match &best {
            Some((existing, _)) if *existing <= order => {}
            _ => best = Some((order, name.to_string())),
        }
    }
    Ok(best)
}

fn warn_duplicate_orders(steps: &[LifecycleStep]) {
    for pair in steps.windows(2) {
        if pair[0].order == pair[1].order {
            tracing::warn!(
                "containers '{}' and '{}' both use lifecycle order {}; relative order follows container ordering",
                pair[0].container.name(),
                pair[1].container.name(),
                pair[0].order
            );
        }
    }
}
