//! # CLI Layer
//!
//! This module is **one possible UI client** for the catalog. It is not the
//! application itself.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Uses `std::process::exit`
//! - Handles argument parsing
//! - Installs the tracing subscriber
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: Convert shell arguments into typed commands via clap
//! 2. **Context Setup**: Resolve configuration and build the API
//! 3. **Dispatch**: Interactive shell, or one one-shot command
//! 4. **Output Formatting**: Hand `CmdResult`s to `render`
//!
//! ## One-shot Commands
//!
//! Each invocation loads the snapshot (a missing file is an empty catalog), runs one
//! operation, and writes the snapshot back only if the items changed.

use super::render::print_result;
use super::setup::{Cli, Commands};
use super::shell;
use catalogapp::api::CatalogApi;
use catalogapp::commands::list::ListOrder;
use catalogapp::commands::update::ItemUpdate;
use catalogapp::error::Result;
use catalogapp::init::{initialize, user_config_dir};
use catalogapp::model::Item;
use catalogapp::store::SnapshotStore;
use clap::Parser;
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cwd = std::env::current_dir()?;
    let config_dir = user_config_dir();
    let mut ctx = initialize(&cwd, config_dir.as_deref(), cli.data_dir.clone())?;
    let file = cli.file.as_deref();

    match cli.command {
        None if std::io::stdin().is_terminal() => {
            ctx.api.load_if_present(file)?;
            shell::run(&mut ctx.api, file, ctx.config.autosave)
        }
        // Naked and piped: behave like `list`
        None => run_one_shot(&mut ctx.api, Commands::List { sorted: false }, file),
        Some(command) => run_one_shot(&mut ctx.api, command, file),
    }
}

/// Stderr subscriber; `RUST_LOG` wins over the `--verbose` default.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run_one_shot<S: SnapshotStore>(
    api: &mut CatalogApi<S>,
    command: Commands,
    file: Option<&str>,
) -> Result<()> {
    api.load_if_present(file)?;

    let result = match command {
        Commands::Add {
            id,
            name,
            description,
            category,
        } => api.add_item(Item::new(id, name, description, category))?,
        Commands::List { sorted } => {
            let order = if sorted {
                ListOrder::Sorted
            } else {
                ListOrder::Insertion
            };
            api.list_items(order)?
        }
        Commands::Get { id } => api.get_item(id)?,
        Commands::Update {
            id,
            name,
            description,
            category,
        } => api.update_item(id, &ItemUpdate::new(name, description, category))?,
        Commands::Delete { id } => api.delete_item(id)?,
        Commands::Search { keyword } => api.search(&keyword)?,
        Commands::Doctor => api.doctor()?,
    };

    if api.is_dirty() {
        api.save(file)?;
    }
    print_result(&result);

    if result.has_errors() {
        std::process::exit(1);
    }
    Ok(())
}
