//! # Configuration
//!
//! Catalog configuration is loaded with [`confique`], layering environment
//! variables over TOML files over compiled defaults.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Environment variables**: `CATALOG_DATA_FILE`, `CATALOG_DATA_DIR`, `CATALOG_AUTOSAVE`.
//! 2. **Local Config**: `./catalog.toml` in the working directory.
//! 3. **User Config**: `catalog.toml` in the OS-appropriate config directory
//!    (via the `directories` crate).
//! 4. **Compiled Defaults**: Built-in fallbacks via `#[config(default = ...)]`.
//!
//! The CLI's `--data-dir` flag is applied on top of all of these by [`crate::init`].
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `data_file` | `catalog.json` | Snapshot used when no file name is given |
//! | `data_dir` | working directory | Where relative snapshot names resolve |
//! | `autosave` | `false` | Interactive shell saves on exit if anything changed |

use crate::error::{CatalogError, Result};
use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "catalog.toml";

/// Configuration for the catalog, stored in `catalog.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Snapshot name used by save/load when none is given, and by one-shot commands.
    #[config(env = "CATALOG_DATA_FILE", default = "catalog.json")]
    pub data_file: String,

    /// Directory relative snapshot names resolve against.
    #[config(env = "CATALOG_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Save to `data_file` when leaving the interactive shell with unsaved changes.
    #[config(env = "CATALOG_AUTOSAVE", default = false)]
    pub autosave: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            data_file: "catalog.json".to_string(),
            data_dir: None,
            autosave: false,
        }
    }
}

impl CatalogConfig {
    /// Loads the layered configuration. `user_config_dir` is the OS config
    /// directory, when one could be determined.
    pub fn load(cwd: &Path, user_config_dir: Option<&Path>) -> Result<Self> {
        let mut builder = CatalogConfig::builder()
            .env()
            .file(cwd.join(CONFIG_FILENAME));
        if let Some(dir) = user_config_dir {
            builder = builder.file(dir.join(CONFIG_FILENAME));
        }
        builder
            .load()
            .map_err(|e| CatalogError::Config(e.to_string()))
    }

    /// Directory snapshots live in: the configured one, resolved against `cwd`
    /// when relative, or `cwd` itself.
    pub fn data_root(&self, cwd: &Path) -> PathBuf {
        match &self.data_dir {
            Some(dir) => cwd.join(dir),
            None => cwd.to_path_buf(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_default_config() {
        let config = CatalogConfig::default();
        assert_eq!(config.data_file, "catalog.json");
        assert_eq!(config.data_dir, None);
        assert!(!config.autosave);
    }

    #[test]
    fn test_data_root_resolution() {
        let cwd = Path::new("/work");
        let mut config = CatalogConfig::default();
        assert_eq!(config.data_root(cwd), PathBuf::from("/work"));

        config.data_dir = Some(PathBuf::from("data"));
        assert_eq!(config.data_root(cwd), PathBuf::from("/work/data"));

        config.data_dir = Some(PathBuf::from("/srv/catalog"));
        assert_eq!(config.data_root(cwd), PathBuf::from("/srv/catalog"));
    }

    #[test]
    fn test_local_file_overrides_user_file() {
        let cwd = tempfile::tempdir().unwrap();
        let user = tempfile::tempdir().unwrap();
        fs::write(
            user.path().join(CONFIG_FILENAME),
            "data_file = \"user.json\"\nautosave = true\n",
        )
        .unwrap();
        fs::write(
            cwd.path().join(CONFIG_FILENAME),
            "data_file = \"local.json\"\n",
        )
        .unwrap();

        let config = CatalogConfig::load(cwd.path(), Some(user.path())).unwrap();
        assert_eq!(config.data_file, "local.json");
        assert!(config.autosave);
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let cwd = tempfile::tempdir().unwrap();
        fs::write(cwd.path().join(CONFIG_FILENAME), "autosave = \"often\"").unwrap();
        assert!(matches!(
            CatalogConfig::load(cwd.path(), None),
            Err(CatalogError::Config(_))
        ));
    }
}
