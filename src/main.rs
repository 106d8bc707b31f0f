//! Trolley - Storefront shopping cart for the terminal
//!
//! CLI entry point that dispatches to subcommands.

use clap::Parser;
use console::style;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use trolley::cli::{Cli, Commands};
use trolley::config::ConfigManager;
use trolley::error::TrolleyResult;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> TrolleyResult<()> {
    let cli = Cli::parse();

    // Initialize logging: 0 = warn, 1 = info, 2+ = debug
    let filter = match cli.verbose {
        0 => EnvFilter::new("trolley=warn"),
        1 => EnvFilter::new("trolley=info"),
        _ => EnvFilter::new("trolley=debug"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    // Load configuration
    let config_manager = if let Some(ref path) = cli.config {
        ConfigManager::with_path(path.clone())
    } else {
        ConfigManager::new()
    };
    let config = config_manager.load()?;

    // Dispatch to command
    match cli.command {
        Commands::Shop => trolley::cli::commands::shop(&config),
        Commands::Add(args) => trolley::cli::commands::add(args, &config),
        Commands::Remove(args) => trolley::cli::commands::remove(args, &config),
        Commands::Qty(args) => trolley::cli::commands::qty(args, &config),
        Commands::Show(args) => trolley::cli::commands::show(args, &config),
        Commands::Catalog(args) => trolley::cli::commands::catalog(args, &config),
        Commands::Init(args) => trolley::cli::commands::init(args, &config),
        Commands::Config(args) => trolley::cli::commands::config(args, &config_manager, &config),
    }
}
