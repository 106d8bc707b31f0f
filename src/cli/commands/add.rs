//! Add command - put units of a product in the cart

use crate::cart::CartAction;
use crate::catalog::Catalog;
use crate::cli::args::AddArgs;
use crate::config::{Config, ConfigManager};
use crate::error::{TrolleyError, TrolleyResult};
use crate::ui::{self, UiContext};

/// Execute the add command
pub fn execute(args: AddArgs, config: &Config) -> TrolleyResult<()> {
    let ctx = UiContext::detect();

    let catalog = Catalog::load(&ConfigManager::catalog_path(config))?;
    let product = catalog
        .get(&args.id)
        .ok_or_else(|| TrolleyError::UnknownProduct(args.id.clone()))?;

    let mut store = super::open_store(config);
    for _ in 0..args.qty {
        store.apply(CartAction::Add(product.clone()));
    }
    let view = store.view();

    ui::step_ok(
        &ctx,
        &format!("Added {} x {}", args.qty, ui::product_label(product)),
    );
    ui::print_cart(&ctx, &view);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::STARTER_CATALOG;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn temp_config(temp: &TempDir) -> Config {
        std::fs::write(temp.path().join("catalog.toml"), STARTER_CATALOG).unwrap();

        let mut config = Config::default();
        config.cart.file = Some(temp.path().join("cart.json"));
        config.catalog.file = Some(temp.path().join("catalog.toml"));
        config
    }

    #[test]
    fn add_puts_units_in_the_cart() {
        let temp = TempDir::new().unwrap();
        let config = temp_config(&temp);

        let args = AddArgs {
            id: "tee-onyx".to_string(),
            qty: 2,
        };
        execute(args, &config).unwrap();

        let view = super::super::open_store(&config).view();
        assert_eq!(view.items.len(), 1);
        assert_eq!(view.items[0].quantity, 2);
        assert_eq!(view.subtotal, "$48.00");
    }

    #[test]
    fn repeated_invocations_merge_lines() {
        let temp = TempDir::new().unwrap();
        let config = temp_config(&temp);

        for _ in 0..2 {
            let args = AddArgs {
                id: "cap-canvas".to_string(),
                qty: 1,
            };
            execute(args, &config).unwrap();
        }

        let view = super::super::open_store(&config).view();
        assert_eq!(view.items.len(), 1);
        assert_eq!(view.items[0].quantity, 2);
    }

    #[test]
    fn unknown_product_is_an_error() {
        let temp = TempDir::new().unwrap();
        let config = temp_config(&temp);

        let args = AddArgs {
            id: "ghost".to_string(),
            qty: 1,
        };
        let result = execute(args, &config);
        assert!(matches!(result, Err(TrolleyError::UnknownProduct(_))));
    }

    #[test]
    fn missing_catalog_is_an_error() {
        let temp = TempDir::new().unwrap();
        let mut config = Config::default();
        config.cart.file = Some(temp.path().join("cart.json"));
        config.catalog.file = Some(PathBuf::from("/nonexistent/catalog.toml"));

        let args = AddArgs {
            id: "tee-onyx".to_string(),
            qty: 1,
        };
        assert!(matches!(
            execute(args, &config),
            Err(TrolleyError::CatalogNotFound(_))
        ));
    }
}
