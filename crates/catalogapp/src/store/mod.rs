//! # Storage Layer
//!
//! Persistence for whole-catalog snapshots. The [`SnapshotStore`] trait lets the
//! API save and load without knowing where the bytes go.
//!
//! ## Snapshot Format
//!
//! A snapshot is one JSON document, the [`CatalogFile`] envelope:
//!
//! ```text
//! {
//!   "version": 1,
//!   "saved_at": "2025-01-01T12:00:00Z",
//!   "items": [ { "id": 1, "name": "...", "description": "...", "category": "..." } ]
//! }
//! ```
//!
//! `items` is in sequential store order, so loading replays the same insertion order.
//!
//! ## Validation
//!
//! Loading checks the envelope before anyone touches the catalog: an unknown
//! `version` or a repeated id is a [`CatalogError::Persistence`]. Nothing half-read
//! ever reaches the in-memory structures.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: one file per snapshot name, written atomically.
//! - [`memory::InMemoryStore`]: keeps serialized snapshots in a map, for tests.

use crate::error::{CatalogError, Result};
use crate::model::Item;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub mod fs;
pub mod memory;

pub const FORMAT_VERSION: u32 = 1;

/// On-disk envelope for a catalog snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogFile {
    pub version: u32,
    pub saved_at: DateTime<Utc>,
    pub items: Vec<Item>,
}

impl CatalogFile {
    /// Stamps `items` with the current format version and time.
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            version: FORMAT_VERSION,
            saved_at: Utc::now(),
            items,
        }
    }

    /// Rejects envelopes this build cannot load faithfully.
    pub fn validate(&self) -> Result<()> {
        if self.version != FORMAT_VERSION {
            return Err(CatalogError::Persistence(format!(
                "unsupported snapshot version {} (expected {})",
                self.version, FORMAT_VERSION
            )));
        }
        let mut seen = HashSet::with_capacity(self.items.len());
        for item in &self.items {
            if !seen.insert(item.id()) {
                return Err(CatalogError::Persistence(format!(
                    "snapshot contains id {} more than once",
                    item.id()
                )));
            }
        }
        Ok(())
    }

    /// Parses and validates a serialized snapshot.
    pub fn from_json(text: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(text)?;
        file.validate()?;
        Ok(file)
    }
}

/// Abstract interface for snapshot persistence.
///
/// Names are opaque to callers; each implementation decides how a name maps to
/// storage (a path relative to a root, a map key, ...).
pub trait SnapshotStore {
    /// Write a snapshot under `name`, replacing any previous one.
    fn save(&self, name: &str, file: &CatalogFile) -> Result<()>;

    /// Read and validate the snapshot stored under `name`.
    fn load(&self, name: &str) -> Result<CatalogFile>;

    /// Whether a snapshot exists under `name`.
    fn exists(&self, name: &str) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rejects_unknown_version() {
        let mut file = CatalogFile::new(vec![]);
        file.version = 7;
        let err = file.validate().unwrap_err();
        assert!(err.is_persistence());
        assert!(err.to_string().contains("version 7"));
    }

    #[test]
    fn validate_rejects_repeated_ids() {
        let file = CatalogFile::new(vec![
            Item::new(1, "a", "", ""),
            Item::new(2, "b", "", ""),
            Item::new(1, "c", "", ""),
        ]);
        assert!(matches!(file.validate(), Err(CatalogError::Persistence(_))));
    }

    #[test]
    fn from_json_reads_envelope() {
        let text = r#"{
            "version": 1,
            "saved_at": "2025-03-01T10:00:00Z",
            "items": [
                {"id": 3, "name": "Lamp", "description": "Desk lamp", "category": "Lighting"}
            ]
        }"#;
        let file = CatalogFile::from_json(text).unwrap();
        assert_eq!(file.items, vec![Item::new(3, "Lamp", "Desk lamp", "Lighting")]);
    }

    #[test]
    fn from_json_reports_malformed_content() {
        let err = CatalogFile::from_json("{\"version\": 1, \"items\": [").unwrap_err();
        assert!(matches!(err, CatalogError::Serialization(_)));
        assert!(err.is_persistence());
    }
}
