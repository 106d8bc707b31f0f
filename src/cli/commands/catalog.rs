//! Catalog command - list the products on offer

use crate::catalog::Catalog;
use crate::cli::args::{CatalogArgs, OutputFormat};
use crate::config::{Config, ConfigManager};
use crate::error::TrolleyResult;
use crate::ui::{self, UiContext};

/// Execute the catalog command
pub fn execute(args: CatalogArgs, config: &Config) -> TrolleyResult<()> {
    let catalog = Catalog::load(&ConfigManager::catalog_path(config))?;

    match args.format {
        OutputFormat::Table => {
            let ctx = UiContext::detect();
            ui::print_catalog(&ctx, catalog.products());
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(catalog.products())?);
        }
        OutputFormat::Plain => {
            for product in catalog.products() {
                println!("{}", product.id);
            }
        }
    }

    Ok(())
}
