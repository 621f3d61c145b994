//! Run-scoped configuration, passed by reference through the call chain.
//!
//! The original tooling this replaces held verbosity and alias state in
//! process-wide mutable globals; here every flag lives in an explicit
//! struct handed to the orchestrator.

/// Ordering applied to the containers of a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContainerOrder {
    /// Lexicographic by container name. Deterministic across platforms,
    /// so generated compose files are stable and diffable.
    #[default]
    Name,
    /// Raw directory-listing order. Filesystem-dependent; kept for parity
    /// with setups that rely on the historical behavior.
    Directory,
}

/// Flags affecting a single boxer invocation.
#[derive(Debug, Clone, Default)]
pub struct GroupConfig {
    /// Redirect child stdio to `boxer_stdout.txt` / `boxer_stderr.txt` and
    /// pass `--quiet-pull` to compose-up.
    pub quiet: bool,
    /// Container ordering for assembly and script phases.
    pub order: ContainerOrder,
}

impl GroupConfig {
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            order: ContainerOrder::default(),
        }
    }
}
