use crate::api::CatalogApi;
use crate::catalog::Catalog;
use crate::model::Item;
use crate::store::fs::FileStore;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    // We keep _temp_dir to ensure the directory is not dropped until the test is done
    pub _temp_dir: TempDir,
    pub store: FileStore,
    pub root: PathBuf,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let root = temp_dir.path().to_path_buf();
        let store = FileStore::new(root.clone());
        Self {
            _temp_dir: temp_dir,
            store,
            root,
        }
    }

    /// An API over a fresh file store rooted in its own temp dir.
    pub fn api() -> (TempDir, CatalogApi<FileStore>) {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let store = FileStore::new(temp_dir.path().to_path_buf());
        let api = CatalogApi::new(Catalog::new(), store, "catalog.json");
        (temp_dir, api)
    }
}

/// A handful of items with mixed ids, names and categories.
pub fn sample_items() -> Vec<Item> {
    vec![
        Item::new(50, "Anvil", "Cast iron, 50kg", "Tools"),
        Item::new(30, "Bolt", "M8 x 40, zinc", "Hardware"),
        Item::new(70, "Chisel", "25mm bevel edge", "Tools"),
        Item::new(20, "Drill", "Cordless, 18V", "Power Tools"),
        Item::new(40, "Epoxy", "Two-part, 5 minute", "Adhesives"),
    ]
}
