//! Init command - write the starter catalog

use crate::catalog::STARTER_CATALOG;
use crate::cli::args::InitArgs;
use crate::config::{Config, ConfigManager};
use crate::error::{TrolleyError, TrolleyResult};
use crate::ui::{self, UiContext};
use std::fs;

/// Execute the init command
pub fn execute(args: InitArgs, config: &Config) -> TrolleyResult<()> {
    let ctx = UiContext::detect();
    let catalog_path = ConfigManager::catalog_path(config);

    if catalog_path.exists() && !args.force {
        return Err(TrolleyError::User(format!(
            "{} already exists. Use --force to overwrite.",
            catalog_path.display()
        )));
    }

    if let Some(parent) = catalog_path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| TrolleyError::io(format!("creating directory {}", parent.display()), e))?;
    }

    fs::write(&catalog_path, STARTER_CATALOG)
        .map_err(|e| TrolleyError::io(format!("writing {}", catalog_path.display()), e))?;

    ui::step_ok_detail(
        &ctx,
        "Starter catalog written",
        &catalog_path.display().to_string(),
    );
    ui::remark(&ctx, "Try: trolley shop");

    Ok(())
}
