//! Assembly of compose documents from fragments.

use super::{strip_comments, ComposeKind, DEFAULT_HEADER};
use crate::config::ContainerOrder;
use crate::error::Result;
use crate::group::Group;
use std::fs;
use std::path::PathBuf;

/// Builds one compose document for a group.
///
/// Structural order is header (custom or default) → one comment-stripped
/// block per container that carries the matching fragment, each followed by
/// a newline separator → optional footer. All fragment reads happen before
/// the single write at the end, so a read failure leaves any previously
/// generated file untouched.
pub struct ComposeAssembler<'a> {
    group: &'a Group,
    order: ContainerOrder,
}

impl<'a> ComposeAssembler<'a> {
    pub fn new(group: &'a Group, order: ContainerOrder) -> Self {
        Self { group, order }
    }

    /// Assemble the document for `kind` and write it into the group
    /// directory, overwriting any previous version. Returns the output path.
    pub fn assemble(&self, kind: ComposeKind) -> Result<PathBuf> {
        let mut yml = String::new();

        let header = self.group.dir().join(kind.header_file());
        if header.is_file() {
            yml.push_str(&strip_comments(&fs::read_to_string(&header)?));
        } else {
            yml.push_str(DEFAULT_HEADER);
        }

        for unit in self.group.containers(self.order)? {
            let fragment = unit.file(kind.fragment_file());
            if !fragment.is_file() {
                continue;
            }
            yml.push_str(&strip_comments(&fs::read_to_string(&fragment)?));
            yml.push('\n');
        }

        let footer = self.group.dir().join(kind.footer_file());
        if footer.is_file() {
            yml.push_str(&strip_comments(&fs::read_to_string(&footer)?));
        }

        let out = self.group.dir().join(kind.output_file());
        fs::write(&out, &yml)?;
        tracing::debug!("assembled {} ({} bytes)", out.display(), yml.len());
        Ok(out)
    }
}
