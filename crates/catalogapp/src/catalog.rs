//! # Catalog
//!
//! The orchestrator. It is the only code with write access to the four structures
//! and every public mutation keeps them consistent:
//!
//! - **Parity**: the sequential store and the search index hold exactly the same id
//!   set after every add, update, delete, undo and load.
//! - **Relocation**: delete moves the shared handle into the undo stack; undo moves
//!   it back into both structures. Nothing is copied.
//! - **Dispatch views**: the priority queues only reference items currently in the
//!   store. Delete purges the deleted id from both queues.
//! - **No partial mutation**: every check runs before the first write, so a failed
//!   operation leaves all four structures as they were.
//!
//! Reads hand out owned [`Item`] snapshots. Callers never get at the shared handles,
//! so the only way to change an item is through [`Catalog::update_item`].

use crate::error::{CatalogError, Result};
use crate::model::{id_of, snapshot, Item, ItemId, ItemRef};
use crate::structures::{Priority, PriorityQueues, SearchIndex, SequentialStore, UndoStack};
use std::collections::HashSet;
use tracing::debug;

#[derive(Default)]
pub struct Catalog {
    items: SequentialStore,
    index: SearchIndex,
    undo: UndoStack,
    queues: PriorityQueues,
}

/// Sizes of every structure, for status displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CatalogStats {
    pub items: usize,
    pub index_height: usize,
    pub undo_depth: usize,
    pub urgent: usize,
    pub normal: usize,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from an ordered item list, rejecting duplicate ids.
    pub fn from_items(items: impl IntoIterator<Item = Item>) -> Result<Self> {
        let mut catalog = Catalog::new();
        for item in items {
            catalog.add_item(item)?;
        }
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn add_item(&mut self, item: Item) -> Result<()> {
        let id = item.id();
        if self.items.contains(id) {
            return Err(CatalogError::DuplicateId(id));
        }
        let shared = item.into_ref();
        self.items.add(shared.clone());
        self.index.insert(shared);
        debug!(id, "item added");
        Ok(())
    }

    /// Rewrites the descriptive fields of `id` in place and returns the new state.
    ///
    /// The index node holds the same handle as the store, and ids never change, so
    /// the tree needs neither re-keying nor a delete/insert round trip.
    pub fn update_item(
        &mut self,
        id: ItemId,
        name: &str,
        description: &str,
        category: &str,
    ) -> Result<Item> {
        if !self.items.update(id, name, description, category) {
            return Err(CatalogError::NotFound(id));
        }
        debug!(id, "item updated");
        self.items
            .find(id)
            .map(|item| snapshot(&item))
            .ok_or(CatalogError::NotFound(id))
    }

    /// Removes `id` from store and index and parks it on the undo stack.
    pub fn delete_item(&mut self, id: ItemId) -> Result<Item> {
        let removed = self.items.remove(id).ok_or(CatalogError::NotFound(id))?;
        self.index.delete(id);
        let purged = self.queues.purge(id);
        let deleted = snapshot(&removed);
        self.undo.push(removed);
        debug!(id, purged, "item deleted");
        Ok(deleted)
    }

    /// Restores the most recent deletion to the end of the store and into the index.
    ///
    /// An add may have claimed the id since the delete. In that case the undo
    /// fails with `DuplicateId` and the deletion stays on the stack.
    pub fn undo_delete(&mut self) -> Result<Item> {
        let id = self.undo.peek().map(id_of).ok_or(CatalogError::NothingToUndo)?;
        if self.items.contains(id) {
            return Err(CatalogError::DuplicateId(id));
        }
        let item = self.undo.pop().ok_or(CatalogError::NothingToUndo)?;
        let restored = snapshot(&item);
        self.items.add(item.clone());
        self.index.insert(item);
        debug!(id = restored.id(), "deletion undone");
        Ok(restored)
    }

    /// Queues `id` under the priority named by `label` ("urgent" or "normal",
    /// any case). The id is checked before the label.
    pub fn enqueue(&mut self, id: ItemId, label: &str) -> Result<(Priority, Item)> {
        let item = self.items.find(id).ok_or(CatalogError::NotFound(id))?;
        let priority: Priority = label.parse()?;
        let queued = snapshot(&item);
        self.queues.enqueue(priority, item);
        debug!(id, %priority, "item enqueued");
        Ok((priority, queued))
    }

    /// Takes the next item off the urgent queue, else the normal queue.
    /// The item stays in the catalog.
    pub fn dequeue(&mut self) -> Option<(Priority, Item)> {
        self.queues
            .dequeue()
            .map(|(priority, item)| (priority, snapshot(&item)))
    }

    /// Current contents of one queue, front first.
    pub fn queued(&self, priority: Priority) -> Vec<Item> {
        self.queues.iter(priority).map(snapshot).collect()
    }

    /// Point lookup through the search index.
    pub fn find(&self, id: ItemId) -> Option<Item> {
        self.index.search(id).map(|item| snapshot(&item))
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.items.contains(id)
    }

    /// Items in insertion order.
    pub fn items(&self) -> impl Iterator<Item = Item> + '_ {
        self.items.iter().map(snapshot)
    }

    /// Items in ascending id order, from the search index.
    pub fn sorted_items(&self) -> impl Iterator<Item = Item> + '_ {
        self.index.inorder().map(snapshot)
    }

    /// Case-insensitive substring match on name or category, in insertion order.
    pub fn search(&self, keyword: &str) -> Vec<Item> {
        self.items
            .iter()
            .filter(|item| item.borrow().matches_keyword(keyword))
            .map(snapshot)
            .collect()
    }

    /// The item an undo would restore, if any.
    pub fn last_deleted(&self) -> Option<Item> {
        self.undo.peek().map(snapshot)
    }

    /// Replaces the whole catalog with `items`, in order.
    ///
    /// The replacement is built and validated off to the side first; on error the
    /// current contents are untouched. Queues and undo history belong to the old
    /// contents and are dropped.
    pub fn replace_contents(&mut self, items: impl IntoIterator<Item = Item>) -> Result<()> {
        let fresh = Catalog::from_items(items)?;
        debug!(count = fresh.len(), "catalog contents replaced");
        *self = fresh;
        Ok(())
    }

    pub fn stats(&self) -> CatalogStats {
        CatalogStats {
            items: self.items.len(),
            index_height: self.index.height(),
            undo_depth: self.undo.len(),
            urgent: self.queues.len_of(Priority::Urgent),
            normal: self.queues.len_of(Priority::Normal),
        }
    }

    /// Checks every cross-structure invariant and describes each violation.
    /// An empty list means the catalog is consistent.
    pub fn verify(&self) -> Vec<String> {
        let mut problems = Vec::new();

        let mut store_ids = HashSet::new();
        for item in &self.items {
            let id = id_of(item);
            if !store_ids.insert(id) {
                problems.push(format!("store holds id {} more than once", id));
            }
            match self.index.search(id) {
                None => problems.push(format!("id {} is in the store but not the index", id)),
                Some(indexed) if !std::rc::Rc::ptr_eq(&indexed, item) => problems.push(format!(
                    "id {} is indexed under a different item than the store holds",
                    id
                )),
                Some(_) => {}
            }
        }

        let indexed: Vec<ItemId> = self.index.inorder().map(id_of).collect();
        if let Some(pair) = indexed.windows(2).find(|pair| pair[0] >= pair[1]) {
            problems.push(format!(
                "index order broken: {} precedes {}",
                pair[0], pair[1]
            ));
        }
        for id in &indexed {
            if !store_ids.contains(id) {
                problems.push(format!("id {} is in the index but not the store", id));
            }
        }
        if self.items.len() != self.index.len() {
            problems.push(format!(
                "store holds {} items but index holds {}",
                self.items.len(),
                self.index.len()
            ));
        }

        for priority in [Priority::Urgent, Priority::Normal] {
            for item in self.queues.iter(priority) {
                if !store_ids.contains(&id_of(item)) {
                    problems.push(format!(
                        "{} queue references id {} which is not in the store",
                        priority,
                        id_of(item)
                    ));
                }
            }
        }

        problems
    }

    #[cfg(test)]
    pub(crate) fn index_ids(&self) -> Vec<ItemId> {
        self.index.inorder().map(id_of).collect()
    }

    #[cfg(test)]
    pub(crate) fn store_handle(&self, id: ItemId) -> Option<ItemRef> {
        self.items.find(id)
    }

    #[cfg(test)]
    pub(crate) fn index_handle(&self, id: ItemId) -> Option<ItemRef> {
        self.index.search(id)
    }
}
