//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single entry
//! point for catalog operations, whatever UI is driving them.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Owns** the session's one [`Catalog`] and the snapshot store
//! - **Tracks** whether the catalog changed since it was last saved or loaded
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: that belongs in `commands/*.rs` and the catalog
//! - **I/O to the terminal**: no stdout, stderr or prompting
//!
//! ## Generic Over SnapshotStore
//!
//! `CatalogApi<S: SnapshotStore>` is generic over the persistence backend:
//! - Production: `CatalogApi<FileStore>`
//! - Testing: `CatalogApi<InMemoryStore>`
//!
//! ## Snapshot Names
//!
//! `save` and `load` take an optional name. `None` means the configured default
//! data file.

use crate::catalog::Catalog;
use crate::commands::{self, list::ListOrder, update::ItemUpdate, CmdResult};
use crate::error::Result;
use crate::model::{Item, ItemId};
use crate::store::SnapshotStore;

pub struct CatalogApi<S: SnapshotStore> {
    catalog: Catalog,
    store: S,
    default_file: String,
    dirty: bool,
}

impl<S: SnapshotStore> CatalogApi<S> {
    pub fn new(catalog: Catalog, store: S, default_file: impl Into<String>) -> Self {
        Self {
            catalog,
            store,
            default_file: default_file.into(),
            dirty: false,
        }
    }

    pub fn add_item(&mut self, item: Item) -> Result<CmdResult> {
        self.mutating(|catalog| commands::add::run(catalog, item))
    }

    pub fn list_items(&self, order: ListOrder) -> Result<CmdResult> {
        commands::list::run(&self.catalog, order)
    }

    pub fn get_item(&self, id: ItemId) -> Result<CmdResult> {
        commands::get::run(&self.catalog, id)
    }

    pub fn update_item(&mut self, id: ItemId, update: &ItemUpdate) -> Result<CmdResult> {
        self.mutating(|catalog| commands::update::run(catalog, id, update))
    }

    pub fn delete_item(&mut self, id: ItemId) -> Result<CmdResult> {
        self.mutating(|catalog| commands::delete::run(catalog, id))
    }

    pub fn undo_delete(&mut self) -> Result<CmdResult> {
        self.mutating(commands::undo::run)
    }

    pub fn enqueue(&mut self, id: ItemId, priority: &str) -> Result<CmdResult> {
        commands::queue::enqueue(&mut self.catalog, id, priority)
    }

    pub fn dequeue(&mut self) -> Result<CmdResult> {
        commands::queue::dequeue(&mut self.catalog)
    }

    pub fn view_queues(&self) -> Result<CmdResult> {
        commands::queue::view(&self.catalog)
    }

    pub fn search(&self, keyword: &str) -> Result<CmdResult> {
        commands::search::run(&self.catalog, keyword)
    }

    pub fn save(&mut self, name: Option<&str>) -> Result<CmdResult> {
        let name = name.unwrap_or(&self.default_file);
        let result = commands::persist::save(&self.catalog, &self.store, name)?;
        self.dirty = false;
        Ok(result)
    }

    pub fn load(&mut self, name: Option<&str>) -> Result<CmdResult> {
        let name = name.unwrap_or(&self.default_file);
        let result = commands::persist::load(&mut self.catalog, &self.store, name)?;
        self.dirty = false;
        Ok(result)
    }

    /// Loads the named (or default) snapshot when it exists; otherwise keeps the
    /// catalog as it is. Returns whether anything was loaded.
    pub fn load_if_present(&mut self, name: Option<&str>) -> Result<bool> {
        let name = name.unwrap_or(&self.default_file).to_string();
        if !self.store.exists(&name) {
            return Ok(false);
        }
        self.load(Some(&name))?;
        Ok(true)
    }

    pub fn doctor(&self) -> Result<CmdResult> {
        commands::doctor::run(&self.catalog)
    }

    /// True when items changed since the last successful save or load.
    /// Queue activity does not count: queues are not persisted.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn default_file(&self) -> &str {
        &self.default_file
    }

    fn mutating(
        &mut self,
        op: impl FnOnce(&mut Catalog) -> Result<CmdResult>,
    ) -> Result<CmdResult> {
        let result = op(&mut self.catalog)?;
        self.dirty = true;
        Ok(result)
    }
}
