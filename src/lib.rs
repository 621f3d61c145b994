//! # Boxer
//!
//! A tool for orchestrating multi-container test environments on top of
//! docker-compose.
//!
//! A *group* is a directory (`<name>.boxes/`) holding one subdirectory per
//! container (`box.<name>/`). Each container directory carries YAML fragments
//! (`build.yml`, `run.yml`) and optional lifecycle scripts. Boxer concatenates
//! the fragments into `docker-compose.build.yml` / `docker-compose.run.yml`
//! and drives the container lifecycle by invoking docker-compose:
//!
//! - **build**: assemble the build file, run checkout scripts, bring the
//!   build environment up, run ordered lifecycle scripts, commit and push
//!   images, tear the environment down
//! - **start** / **stop**: bring the run environment up (attached) / down
//! - **exec**: run a command inside one running container
//!
//! Build-time and run-time environments use distinct compose project
//! namespaces derived from the group alias, so they never collide.
//!
//! ## Execution model
//!
//! Everything is sequential and fail-fast: each external process is awaited
//! to completion before the next starts, and the first non-zero exit code
//! aborts the remaining steps and becomes the tool's own exit code.

pub mod compose;
pub mod config;
pub mod docker;
pub mod error;
pub mod group;
pub mod orchestrator;
pub mod output;
pub mod runner;

// Re-export commonly used types
pub use compose::{ComposeAssembler, ComposeKind};
pub use config::{ContainerOrder, GroupConfig};
pub use error::{Error, Result};
pub use group::{ContainerUnit, Group};
pub use orchestrator::Orchestrator;
pub use output::{CliOutput, QuietOutput, UserOutput};
pub use runner::{ScriptPhase, ScriptRunner};
