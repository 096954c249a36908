//! # Context Setup
//!
//! [`initialize`] turns a working directory and the CLI's overrides into a ready
//! [`CatalogContext`]: configuration resolved, snapshot store rooted, and an empty
//! catalog owned by the API.
//!
//! ## Data Directory Resolution
//!
//! 1. `data_override` (the CLI `--data-dir` flag), when given.
//! 2. `data_dir` from configuration (environment or `catalog.toml`).
//! 3. The working directory.
//!
//! Relative paths resolve against the working directory.
//!
//! ## Config Directory
//!
//! The user-level `catalog.toml` lives in the OS config directory from
//! `directories::ProjectDirs`. `CATALOG_CONFIG_DIR` replaces it, which keeps
//! tests away from the real user configuration.

use crate::api::CatalogApi;
use crate::catalog::Catalog;
use crate::config::CatalogConfig;
use crate::error::Result;
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct CatalogContext {
    pub api: CatalogApi<FileStore>,
    pub config: CatalogConfig,
}

/// OS-appropriate directory for the user-level config file, if any.
pub fn user_config_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("CATALOG_CONFIG_DIR") {
        return Some(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "catalog", "catalog").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Build the catalog context for `cwd`. `config_dir` holds the user-level
/// `catalog.toml`; `None` skips that layer.
///
/// # Examples
///
/// ```ignore
/// // Configuration decides where snapshots live
/// let ctx = initialize(&cwd, user_config_dir().as_deref(), None)?;
///
/// // Explicit data directory, as passed by --data-dir
/// let ctx = initialize(&cwd, None, Some(PathBuf::from("/srv/catalog")))?;
/// ```
pub fn initialize(
    cwd: &Path,
    config_dir: Option<&Path>,
    data_override: Option<PathBuf>,
) -> Result<CatalogContext> {
    let mut config = CatalogConfig::load(cwd, config_dir)?;
    if let Some(dir) = data_override {
        config.data_dir = Some(dir);
    }

    let root = config.data_root(cwd);
    debug!(root = %root.display(), data_file = %config.data_file, "catalog context ready");

    let store = FileStore::new(root);
    let api = CatalogApi::new(Catalog::new(), store, config.data_file.clone());
    Ok(CatalogContext { api, config })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Item;

    #[test]
    fn override_wins_over_config() {
        let cwd = tempfile::tempdir().unwrap();
        std::fs::write(cwd.path().join("catalog.toml"), "data_dir = \"from-config\"\n").unwrap();

        let ctx = initialize(cwd.path(), None, Some(PathBuf::from("from-flag"))).unwrap();
        assert_eq!(ctx.api.store().root(), cwd.path().join("from-flag"));
    }

    #[test]
    fn config_dir_used_without_override() {
        let cwd = tempfile::tempdir().unwrap();
        std::fs::write(cwd.path().join("catalog.toml"), "data_dir = \"from-config\"\n").unwrap();

        let ctx = initialize(cwd.path(), None, None).unwrap();
        assert_eq!(ctx.api.store().root(), cwd.path().join("from-config"));
    }

    #[test]
    fn saves_land_in_resolved_root() {
        let cwd = tempfile::tempdir().unwrap();
        let mut ctx = initialize(cwd.path(), None, Some(PathBuf::from("data"))).unwrap();
        ctx.api.add_item(Item::new(1, "a", "b", "c")).unwrap();
        ctx.api.save(None).unwrap();
        assert!(cwd.path().join("data").join("catalog.json").is_file());
    }

    #[test]
    fn user_config_dir_is_a_lower_layer() {
        let cwd = tempfile::tempdir().unwrap();
        let user = tempfile::tempdir().unwrap();
        std::fs::write(
            user.path().join("catalog.toml"),
            "data_file = \"user.json\"\ndata_dir = \"from-user\"\n",
        )
        .unwrap();
        std::fs::write(cwd.path().join("catalog.toml"), "data_dir = \"from-local\"\n").unwrap();

        let ctx = initialize(cwd.path(), Some(user.path()), None).unwrap();
        assert_eq!(ctx.api.default_file(), "user.json");
        assert_eq!(ctx.api.store().root(), cwd.path().join("from-local"));

        let ctx = initialize(cwd.path(), None, None).unwrap();
        assert_eq!(ctx.api.default_file(), "catalog.json");
    }
}
