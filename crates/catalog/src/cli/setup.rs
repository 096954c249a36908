use catalogapp::model::ItemId;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "catalog",
    bin_name = "catalog",
    version,
    disable_help_subcommand = true,
    after_help = "Run without a command in a terminal to open the interactive menu."
)]
#[command(about = "Item catalog with a search index, undo and priority dispatch", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Snapshot file to load and save (defaults to the configured data file)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub file: Option<String>,

    /// Directory snapshot files live in
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new item
    #[command(allow_negative_numbers = true)]
    Add {
        id: ItemId,
        name: String,
        description: String,
        category: String,
    },

    /// List all items
    #[command(alias = "ls")]
    List {
        /// Order by id instead of insertion order
        #[arg(short, long)]
        sorted: bool,
    },

    /// Look up one item by id
    #[command(allow_negative_numbers = true)]
    Get { id: ItemId },

    /// Replace an item's name, description and category
    #[command(allow_negative_numbers = true)]
    Update {
        id: ItemId,
        name: String,
        description: String,
        category: String,
    },

    /// Delete an item
    #[command(alias = "rm", allow_negative_numbers = true)]
    Delete { id: ItemId },

    /// Find items whose name or category contains a keyword
    Search { keyword: String },

    /// Check that the catalog's structures agree with each other
    Doctor,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_negative_ids_and_globals() {
        let cli = Cli::parse_from(["catalog", "get", "-7", "--file", "x.json"]);
        assert!(matches!(cli.command, Some(Commands::Get { id: -7 })));
        assert_eq!(cli.file.as_deref(), Some("x.json"));
    }

    #[test]
    fn naked_invocation_has_no_command() {
        let cli = Cli::parse_from(["catalog", "-v"]);
        assert!(cli.command.is_none());
        assert!(cli.verbose);
    }

    #[test]
    fn list_sorted_flag() {
        let cli = Cli::parse_from(["catalog", "ls", "--sorted"]);
        assert!(matches!(cli.command, Some(Commands::List { sorted: true })));
    }
}
