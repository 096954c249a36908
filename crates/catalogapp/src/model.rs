//! # Domain Model
//!
//! An [`Item`] is a catalog record: an integer id fixed at creation plus three
//! free-text descriptive fields.
//!
//! ## Identity
//!
//! The id has no setter. The only way to change descriptive fields is
//! [`Item::set_fields`], which rewrites all three at once, mirroring the
//! update operation of the catalog.
//!
//! ## Sharing
//!
//! Once inserted, an item lives behind an [`ItemRef`]. The sequential store owns
//! the canonical handle; the search index, undo stack and priority queues hold
//! clones of the same `Rc`, never copies of the item.

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

pub type ItemId = i64;

/// Shared, interior-mutable handle to one canonical item.
pub type ItemRef = Rc<RefCell<Item>>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    id: ItemId,
    name: String,
    description: String,
    category: String,
}

impl Item {
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            category: category.into(),
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn set_fields(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
    ) {
        self.name = name.into();
        self.description = description.into();
        self.category = category.into();
    }

    /// Case-insensitive substring match against name or category.
    pub fn matches_keyword(&self, keyword: &str) -> bool {
        let needle = keyword.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self.category.to_lowercase().contains(&needle)
    }

    /// Wraps the item into the shared handle used by every structure.
    pub fn into_ref(self) -> ItemRef {
        Rc::new(RefCell::new(self))
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Description: {}, Category: {}",
            self.id, self.name, self.description, self.category
        )
    }
}

/// Reads the id out of a shared handle.
pub(crate) fn id_of(item: &ItemRef) -> ItemId {
    item.borrow().id()
}

/// Takes an owned copy of the current state of a shared item.
pub(crate) fn snapshot(item: &ItemRef) -> Item {
    item.borrow().clone()
}
