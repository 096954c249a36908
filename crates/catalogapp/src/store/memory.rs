use super::{CatalogFile, SnapshotStore};
use crate::error::{CatalogError, Result};
use std::cell::RefCell;
use std::collections::HashMap;

/// In-memory snapshot store for testing.
///
/// Snapshots are kept serialized, so a load goes through the same parsing and
/// validation as a file would. `RefCell` keeps the trait's `&self` signatures.
#[derive(Default)]
pub struct InMemoryStore {
    snapshots: RefCell<HashMap<String, String>>,
    simulate_write_error: RefCell<bool>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Test helper to plant arbitrary (possibly malformed) snapshot text.
    pub fn put_raw(&self, name: &str, text: impl Into<String>) {
        self.snapshots
            .borrow_mut()
            .insert(name.to_string(), text.into());
    }

    pub fn raw(&self, name: &str) -> Option<String> {
        self.snapshots.borrow().get(name).cloned()
    }
}

impl SnapshotStore for InMemoryStore {
    fn save(&self, name: &str, file: &CatalogFile) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(CatalogError::Persistence(
                "Simulated write error".to_string(),
            ));
        }
        let text = serde_json::to_string(file)?;
        self.snapshots.borrow_mut().insert(name.to_string(), text);
        Ok(())
    }

    fn load(&self, name: &str) -> Result<CatalogFile> {
        let snapshots = self.snapshots.borrow();
        let text = snapshots.get(name).ok_or_else(|| {
            CatalogError::Persistence(format!("no snapshot named {:?}", name))
        })?;
        CatalogFile::from_json(text)
    }

    fn exists(&self, name: &str) -> bool {
        self.snapshots.borrow().contains_key(name)
    }
}
