//! # In-Memory Structures
//!
//! The four structures the [`crate::catalog::Catalog`] keeps consistent:
//!
//! - [`sequence::SequentialStore`]: singly linked list in insertion order. The source
//!   of truth for existence and enumeration order.
//! - [`search_index::SearchIndex`]: plain (unbalanced) binary search tree keyed by id.
//! - [`undo::UndoStack`]: items removed by delete, most recent last.
//! - [`queues::PriorityQueues`]: two FIFO dispatch views, "urgent" and "normal".
//!
//! Each structure owns its nodes exclusively (`Option<Box<_>>` chains). Items are
//! shared between structures through [`crate::model::ItemRef`].
//!
//! None of these check cross-structure invariants on their own; they are only
//! mutated through the catalog.

pub mod queues;
pub mod search_index;
pub mod sequence;
pub mod undo;

pub use queues::{Priority, PriorityQueues};
pub use search_index::SearchIndex;
pub use sequence::SequentialStore;
pub use undo::UndoStack;
