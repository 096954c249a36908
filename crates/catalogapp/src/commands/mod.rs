//! # Command Layer
//!
//! One submodule per driver-facing operation. Each exposes plain functions that
//! take the [`Catalog`](crate::catalog::Catalog) (and, for persistence, a
//! [`SnapshotStore`](crate::store::SnapshotStore)) and return a [`CmdResult`].
//!
//! ## What Commands Do NOT Do
//!
//! - **Any terminal I/O**: no stdout, stderr or prompting
//! - **Argument parsing**: that's the CLI layer's job
//! - **Exit codes**: return `Result`, let the caller decide
//!
//! Invariants are the catalog's business; commands only translate its outcomes
//! into items and leveled messages.
//!
//! ## Structured Returns
//!
//! [`CmdResult`] carries:
//! - `affected_items`: items created, changed, removed or restored by the call
//! - `listed_items`: items to display
//! - `queues`: both dispatch queues, for `view-queues`
//! - `stats`: structure sizes, for `doctor`
//! - `messages`: status lines with levels (info, success, warning, error)
//!
//! ## Testing Strategy
//!
//! Command tests build a `Catalog` directly and use `InMemoryStore` for the
//! persistence commands, so none of them touch the filesystem.
//!
//! ## Command Modules
//!
//! - [`add`]: Add a new item
//! - [`list`]: View all items, in insertion or id order
//! - [`get`]: Look up one item through the search index
//! - [`update`]: Rewrite an item's descriptive fields
//! - [`delete`]: Delete an item (undoable)
//! - [`undo`]: Restore the most recent deletion
//! - [`queue`]: Enqueue, dequeue and view the priority queues
//! - [`search`]: Keyword search on name or category
//! - [`persist`]: Save and load snapshots
//! - [`doctor`]: Verify cross-structure consistency

use crate::catalog::CatalogStats;
use crate::model::Item;
use serde::Serialize;

pub mod add;
pub mod delete;
pub mod doctor;
pub mod get;
pub mod list;
pub mod persist;
pub mod queue;
pub mod search;
pub mod undo;
pub mod update;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Both dispatch queues, front first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueueSnapshot {
    pub urgent: Vec<Item>,
    pub normal: Vec<Item>,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_items: Vec<Item>,
    pub listed_items: Vec<Item>,
    pub queues: Option<QueueSnapshot>,
    pub stats: Option<CatalogStats>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_items(mut self, items: Vec<Item>) -> Self {
        self.affected_items = items;
        self
    }

    pub fn with_listed_items(mut self, items: Vec<Item>) -> Self {
        self.listed_items = items;
        self
    }

    /// True when any message is at error level.
    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|message| message.level == MessageLevel::Error)
    }
}
