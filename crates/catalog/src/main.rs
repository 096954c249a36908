//! # Catalog CLI Architecture
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, while this file
//! only invokes `cli::run()` and handles process termination.
//!
//! ## Workspace Structure
//!
//! - `crates/catalogapp/`: Core library: structures, catalog, commands, API
//! - `crates/catalog/`: This CLI tool, depends on the `catalogapp` library
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/catalog/src/cli/)                        │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Dispatch + tracing setup (commands.rs)                   │
//! │  - Interactive menu via dialoguer (shell.rs)                │
//! │  - Terminal rendering via console (render.rs)               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/catalogapp/src/api.rs)                   │
//! │  - Owns the session's Catalog and snapshot store            │
//! │  - Returns structured `CmdResult` values                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Commands + Catalog (crates/catalogapp/src/)                │
//! │  - All invariants, no knowledge of stdout/stderr            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Testing Approach
//!
//! - **Library**: unit tests next to every structure and command.
//! - **CLI (`src/cli/`)**: parsing and rendering tests on canned values; the
//!   shell's `perform` is tested against an in-memory store.
//! - **End to end (`tests/`)**: the built binary run with `assert_cmd` against a
//!   temp data directory.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
