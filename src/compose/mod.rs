//! Compose file assembly.
//!
//! Builds `docker-compose.build.yml` / `docker-compose.run.yml` by
//! concatenating comment-stripped per-container fragments between an
//! optional group header and footer. The assembled YAML is never parsed or
//! validated here; docker-compose is the judge of its well-formedness.

mod assembler;
mod fragment;

pub use assembler::ComposeAssembler;
pub use fragment::strip_comments;

/// Header used when the group supplies no `*.header.yml` of its own.
pub const DEFAULT_HEADER: &str = "version: '3.1'\n\nservices:\n\n";

/// The two compose documents a group can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposeKind {
    Build,
    Run,
}

impl ComposeKind {
    /// Group-level header fragment, optional.
    pub fn header_file(self) -> &'static str {
        match self {
            ComposeKind::Build => "build.header.yml",
            ComposeKind::Run => "run.header.yml",
        }
    }

    /// Group-level footer fragment, optional.
    pub fn footer_file(self) -> &'static str {
        match self {
            ComposeKind::Build => "build.footer.yml",
            ComposeKind::Run => "run.footer.yml",
        }
    }

    /// Per-container service fragment.
    pub fn fragment_file(self) -> &'static str {
        match self {
            ComposeKind::Build => "build.yml",
            ComposeKind::Run => "run.yml",
        }
    }

    /// Generated compose file, written into the group directory.
    pub fn output_file(self) -> &'static str {
        match self {
            ComposeKind::Build => "docker-compose.build.yml",
            ComposeKind::Run => "docker-compose.run.yml",
        }
    }
}
