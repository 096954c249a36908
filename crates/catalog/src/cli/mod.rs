//! # CLI Behavior
//!
//! This is **one possible UI client** for the catalog library. It is the only place
//! that knows about terminal I/O, exit codes and output formatting.
//!
//! For the overall architecture, see the crate-level documentation in [`crate`].
//!
//! ## Naked Execution (`catalog`)
//!
//! In a terminal, running `catalog` with no command opens the interactive menu: the
//! fourteen operations of the catalog, one session, one in-memory catalog. With
//! `autosave` configured, unsaved changes are written on exit.
//!
//! When stdin is not a terminal, a naked `catalog` lists the items instead.
//!
//! ## One-shot Commands
//!
//! `add`, `list`, `get`, `update`, `delete`, `search` and `doctor` each load the
//! snapshot, run, and save when they changed something. Queues and undo history
//! only exist inside a session, so the one-shot surface leaves them out.
//!
//! ## Module Structure
//!
//! - `commands`: Entry point, tracing setup, one-shot dispatch
//! - `shell`: The interactive menu
//! - `render`: Output formatting (aligned rows, queues, messages)
//! - `setup`: Argument parsing via clap
//! - `styles`: Terminal styling constants

mod commands;
mod render;
pub mod setup;
mod shell;
mod styles;

pub use commands::run;
