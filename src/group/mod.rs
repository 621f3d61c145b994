//! Groups and their container units.
//!
//! A group lives on disk as `<name>.boxes/`; each container of the group is
//! a `box.<name>/` subdirectory. This module owns the naming rules and the
//! directory scanning that every other component builds on.

use crate::config::ContainerOrder;
use crate::error::{Error, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Suffix appended to a group name to form its on-disk directory name.
pub const GROUP_SUFFIX: &str = ".boxes";

/// Prefix marking a subdirectory of a group as a container unit.
pub const BOX_PREFIX: &str = "box.";

/// A named collection of containers, backed by a `<name>.boxes/` directory.
#[derive(Debug, Clone)]
pub struct Group {
    name: String,
    alias: String,
    dir: PathBuf,
}

impl Group {
    /// Derive a group from a user-supplied name.
    ///
    /// The name may be given with or without the `.boxes` suffix; the alias
    /// (used to namespace compose projects) is the unsuffixed name,
    /// lowercased.
    pub fn new(name: &str, base: &Path) -> Self {
        let (dir_name, alias) = match name.strip_suffix(GROUP_SUFFIX) {
            Some(stem) => (name.to_string(), stem.to_lowercase()),
            None => (format!("{name}{GROUP_SUFFIX}"), name.to_lowercase()),
        };
        let dir = base.join(&dir_name);
        Self {
            name: dir_name,
            alias,
            dir,
        }
    }

    /// Group name including the `.boxes` suffix.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Lowercase identifier used to namespace compose projects.
    pub fn alias(&self) -> &str {
        &self.alias
    }

    /// Group directory path.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Fail with [`Error::GroupNotFound`] unless the group directory exists.
    pub fn ensure_exists(&self) -> Result<()> {
        if self.dir.is_dir() {
            Ok(())
        } else {
            Err(Error::GroupNotFound(self.dir.display().to_string()))
        }
    }

    /// Collect the container units of this group.
    ///
    /// Entries named `box.<name>` that are not directories are skipped
    /// silently. A missing group directory is [`Error::GroupNotFound`].
    pub fn containers(&self, order: ContainerOrder) -> Result<Vec<ContainerUnit>> {
        let entries = fs::read_dir(&self.dir).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                Error::GroupNotFound(self.dir.display().to_string())
            } else {
                Error::Io(e)
            }
        })?;

        let mut units = Vec::new();
        for entry in entries {
            let entry = entry?;
            let file_name = entry.file_name();
            let Some(dir_name) = file_name.to_str() else {
                continue;
            };
            let Some(container) = dir_name.strip_prefix(BOX_PREFIX) else {
                continue;
            };
            if !entry.file_type()?.is_dir() {
                tracing::debug!("skipping non-directory entry {}", dir_name);
                continue;
            }
            units.push(ContainerUnit {
                name: container.to_string(),
                dir: entry.path(),
            });
        }

        if order == ContainerOrder::Name {
            units.sort_by(|a, b| a.name.cmp(&b.name));
        }
        Ok(units)
    }
}

/// One container's configuration bundle: a `box.<name>/` directory.
#[derive(Debug, Clone)]
pub struct ContainerUnit {
    name: String,
    dir: PathBuf,
}

impl ContainerUnit {
    /// Container name with the `box.` prefix stripped.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Container directory path.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of a file inside the container directory.
    pub fn file(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::tempdir;

    #[test]
    fn bare_name_gets_suffix_and_lowercase_alias() {
        let group = Group::new("Demo", Path::new("/work"));
        assert_eq!(group.name(), "Demo.boxes");
        assert_eq!(group.alias(), "demo");
        assert_eq!(group.dir(), Path::new("/work/Demo.boxes"));
    }

    #[test]
    fn suffixed_name_is_kept_and_alias_stripped() {
        let group = Group::new("Demo.boxes", Path::new("/work"));
        assert_eq!(group.name(), "Demo.boxes");
        assert_eq!(group.alias(), "demo");
    }

    #[test]
    fn missing_group_dir_is_not_found() {
        let tmp = tempdir().unwrap();
        let group = Group::new("ghost", tmp.path());
        let err = group.containers(ContainerOrder::Name).unwrap_err();
        assert!(matches!(err, Error::GroupNotFound(_)));
        assert!(matches!(
            group.ensure_exists().unwrap_err(),
            Error::GroupNotFound(_)
        ));
    }

    #[test]
    fn collects_only_prefixed_directories() {
        let tmp = tempdir().unwrap();
        let group = Group::new("demo", tmp.path());
        fs::create_dir(group.dir()).unwrap();
        fs::create_dir(group.dir().join("box.api")).unwrap();
        fs::create_dir(group.dir().join("box.db")).unwrap();
        fs::create_dir(group.dir().join("notes")).unwrap();
        // Prefix match but a plain file: skipped, not an error
        File::create(group.dir().join("box.stray")).unwrap();

        let units = group.containers(ContainerOrder::Name).unwrap();
        let names: Vec<_> = units.iter().map(|u| u.name()).collect();
        assert_eq!(names, vec!["api", "db"]);
    }

    #[test]
    fn name_order_is_lexicographic() {
        let tmp = tempdir().unwrap();
        let group = Group::new("demo", tmp.path());
        fs::create_dir(group.dir()).unwrap();
        for name in ["box.zeta", "box.alpha", "box.mid"] {
            fs::create_dir(group.dir().join(name)).unwrap();
        }
        let units = group.containers(ContainerOrder::Name).unwrap();
        let names: Vec<_> = units.iter().map(|u| u.name()).collect();
        assert_eq!(names, vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn directory_order_returns_all_units() {
        let tmp = tempdir().unwrap();
        let group = Group::new("demo", tmp.path());
        fs::create_dir(group.dir()).unwrap();
        for name in ["box.a", "box.b", "box.c"] {
            fs::create_dir(group.dir().join(name)).unwrap();
        }
        // Listing order is filesystem-dependent, so only check membership.
        let units = group.containers(ContainerOrder::Directory).unwrap();
        let mut names: Vec<_> = units.iter().map(|u| u.name().to_string()).collect();
        names.sort();
        assert_eq!(names, vec!["a", "b", "c"]);
    }
}
