//! CLI argument definitions using clap derive

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Trolley - Storefront shopping cart for the terminal
///
/// Keeps a persistent local cart over a product catalog, with one-shot
/// commands for scripting and an interactive shop session.
#[derive(Parser, Debug)]
#[command(name = "trolley")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "TROLLEY_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Browse the catalog and manage the cart interactively
    Shop,

    /// Add a product to the cart
    Add(AddArgs),

    /// Remove a product from the cart entirely
    Remove(RemoveArgs),

    /// Adjust the quantity of a product already in the cart
    Qty(QtyArgs),

    /// Show the cart
    Show(ShowArgs),

    /// List the products available in the catalog
    Catalog(CatalogArgs),

    /// Write the starter catalog so there is something to shop for
    Init(InitArgs),

    /// Show or edit configuration
    Config(ConfigArgs),
}

/// Arguments for the add command
#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Product id (see: trolley catalog)
    pub id: String,

    /// How many units to add
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub qty: u32,
}

/// Arguments for the remove command
#[derive(Parser, Debug)]
pub struct RemoveArgs {
    /// Product id of the cart line to drop
    pub id: String,
}

/// Arguments for the qty command
#[derive(Parser, Debug)]
pub struct QtyArgs {
    /// Product id of the cart line to adjust
    pub id: String,

    /// Signed change to the quantity; dropping to zero removes the line
    #[arg(allow_hyphen_values = true)]
    pub delta: i64,
}

/// Arguments for the show command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Output format
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,
}

/// Arguments for the catalog command
#[derive(Parser, Debug)]
pub struct CatalogArgs {
    /// Output format
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,
}

/// Arguments for the init command
#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Overwrite an existing catalog file
    #[arg(short, long)]
    pub force: bool,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Subcommand for config
    #[command(subcommand)]
    pub action: Option<ConfigAction>,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., storefront.name)
        key: String,
        /// Value to set
        value: String,
    },
}

/// Output format for show and catalog
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// JSON output
    Json,
    /// Simple text (one per line)
    Plain,
}
