//! # Catalog Architecture
//!
//! `catalogapp` is a **UI-agnostic item catalog library**. The `catalog` binary is one
//! client of it; nothing in here knows about terminals, prompts or exit codes.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Single entry point for every UI                          │
//! │  - Owns one Catalog and one SnapshotStore                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per operation                                 │
//! │  - Returns structured CmdResult values, never strings       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Catalog (catalog.rs)                                       │
//! │  - The only writer of the structures below                  │
//! │  - Keeps store and index in lockstep                        │
//! └─────────────────────────────────────────────────────────────┘
//!                 │                              │
//!                 ▼                              ▼
//! ┌──────────────────────────────┐  ┌──────────────────────────────┐
//! │  Structures (structures/)    │  │  Snapshots (store/)          │
//! │  - SequentialStore           │  │  - SnapshotStore trait       │
//! │  - SearchIndex               │  │  - FileStore, InMemoryStore  │
//! │  - UndoStack, PriorityQueues │  │                              │
//! └──────────────────────────────┘  └──────────────────────────────┘
//! ```
//!
//! ## Shared Items
//!
//! Every structure holds an [`model::ItemRef`] (`Rc<RefCell<Item>>`) to the same
//! canonical item. An update mutates the item once and every holder observes it,
//! so the search index never needs to be re-keyed: ids are fixed at creation.
//!
//! The crate is single-threaded by construction (`Rc` is `!Send`), which matches the
//! synchronous, one-operation-at-a-time model of the catalog.
//!
//! ## Testing Strategy
//!
//! - **Structures**: invariant tests per structure (ordering, splicing, BST deletion).
//! - **Catalog**: cross-structure invariants after every kind of mutation.
//! - **Commands**: result contents and messages, using `InMemoryStore`.
//! - **Store**: round trips through real files in temp dirs.

pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod model;
pub mod store;
pub mod structures;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
