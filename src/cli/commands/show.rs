//! Show command - print the cart

use crate::cli::args::{OutputFormat, ShowArgs};
use crate::config::Config;
use crate::error::TrolleyResult;
use crate::ui::{self, UiContext};

/// Execute the show command
pub fn execute(args: ShowArgs, config: &Config) -> TrolleyResult<()> {
    let store = super::open_store(config);
    let view = store.view();

    match args.format {
        OutputFormat::Table => {
            let ctx = UiContext::detect();
            ui::print_cart(&ctx, &view);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&view)?);
        }
        OutputFormat::Plain => {
            for item in &view.items {
                println!("{} {}", item.id, item.quantity);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::STARTER_CATALOG;
    use crate::cli::args::AddArgs;
    use tempfile::TempDir;

    fn temp_config(temp: &TempDir) -> Config {
        std::fs::write(temp.path().join("catalog.toml"), STARTER_CATALOG).unwrap();

        let mut config = Config::default();
        config.cart.file = Some(temp.path().join("cart.json"));
        config.catalog.file = Some(temp.path().join("catalog.toml"));
        config
    }

    #[test]
    fn show_runs_in_every_format() {
        let temp = TempDir::new().unwrap();
        let config = temp_config(&temp);

        let add = AddArgs {
            id: "hoodie-harbor".to_string(),
            qty: 1,
        };
        super::super::add(add, &config).unwrap();

        for format in [OutputFormat::Table, OutputFormat::Json, OutputFormat::Plain] {
            execute(ShowArgs { format }, &config).unwrap();
        }
    }

    #[test]
    fn show_tolerates_a_corrupt_cart_file() {
        let temp = TempDir::new().unwrap();
        let config = temp_config(&temp);
        std::fs::write(temp.path().join("cart.json"), "not json at all").unwrap();

        let args = ShowArgs {
            format: OutputFormat::Table,
        };
        execute(args, &config).unwrap();
        assert!(super::super::open_store(&config).view().is_empty());
    }
}
