//! Remove command - drop a cart line entirely

use crate::cart::CartAction;
use crate::cli::args::RemoveArgs;
use crate::config::Config;
use crate::error::TrolleyResult;
use crate::ui::{self, UiContext};

/// Execute the remove command
pub fn execute(args: RemoveArgs, config: &Config) -> TrolleyResult<()> {
    let ctx = UiContext::detect();

    let mut store = super::open_store(config);
    let had_line = store.find(&args.id).is_some();
    let view = store.apply(CartAction::Remove(args.id.clone()));

    if had_line {
        ui::step_ok(&ctx, &format!("Removed {}", args.id));
    } else {
        ui::step_info(&ctx, &format!("No cart line for {}", args.id));
    }
    ui::print_cart(&ctx, &view);

    Ok(())
}
