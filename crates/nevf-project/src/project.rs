//! Project bootstrap: default folder structure under a base directory

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use nevf_core::{Error, Result};

use crate::config::ProjectConfig;

/// Directories every project starts with
const DEFAULT_DIRS: [&str; 4] = ["blend", "assets", "scripts", "nevf"];

/// A bootstrapped project on disk
#[derive(Debug, Clone)]
pub struct Project {
    pub name: String,
    pub base_dir: PathBuf,
}

impl Project {
    /// Create the default folder structure for a configured project
    ///
    /// Requires the `name` and `base_dir` config keys; a relative base
    /// directory is resolved against `working_dir`. Directory creation is
    /// idempotent, so bootstrapping an existing project is a no-op.
    pub fn bootstrap(config: &ProjectConfig, working_dir: impl AsRef<Path>) -> Result<Self> {
        let name = config
            .name()
            .ok_or_else(|| Error::MissingConfig { key: "name".to_string() })?
            .to_string();
        let base_dir = config
            .base_dir()
            .ok_or_else(|| Error::MissingConfig { key: "base_dir".to_string() })?;
        let base_dir = working_dir.as_ref().join(base_dir);

        info!(name = %name, base_dir = %base_dir.display(), "bootstrapping project");

        for dir in DEFAULT_DIRS {
            fs::create_dir_all(base_dir.join(dir))?;
        }

        Ok(Self { name, base_dir })
    }

    /// Directory for authoring-tool source files
    pub fn blend_dir(&self) -> PathBuf {
        self.base_dir.join("blend")
    }

    /// Directory for processed assets
    pub fn assets_dir(&self) -> PathBuf {
        self.base_dir.join("assets")
    }

    /// Directory for project scripts
    pub fn scripts_dir(&self) -> PathBuf {
        self.base_dir.join("scripts")
    }

    /// Directory for exported nevf documents
    pub fn nevf_dir(&self) -> PathBuf {
        self.base_dir.join("nevf")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nevf_doc::Document;

    fn config(name: Option<&str>, base_dir: Option<&str>) -> ProjectConfig {
        let mut doc = Document::new();
        if let Some(name) = name {
            doc.set("name", name);
        }
        if let Some(base_dir) = base_dir {
            doc.set("base_dir", base_dir);
        }
        ProjectConfig::from_document(doc)
    }

    #[test]
    fn test_bootstrap_creates_default_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let project =
            Project::bootstrap(&config(Some("demo"), Some("demo_root")), dir.path()).unwrap();

        assert_eq!(project.name, "demo");
        assert!(project.blend_dir().is_dir());
        assert!(project.assets_dir().is_dir());
        assert!(project.scripts_dir().is_dir());
        assert!(project.nevf_dir().is_dir());
    }

    #[test]
    fn test_bootstrap_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config(Some("demo"), Some("demo_root"));

        Project::bootstrap(&cfg, dir.path()).unwrap();
        assert!(Project::bootstrap(&cfg, dir.path()).is_ok());
    }

    #[test]
    fn test_bootstrap_requires_name_and_base_dir() {
        let dir = tempfile::tempdir().unwrap();

        let err = Project::bootstrap(&config(None, Some("x")), dir.path()).unwrap_err();
        assert!(matches!(err, Error::MissingConfig { .. }));

        let err = Project::bootstrap(&config(Some("demo"), None), dir.path()).unwrap_err();
        assert!(matches!(err, Error::MissingConfig { .. }));
    }
}
