//! Qty command - adjust the quantity of a cart line

use crate::cart::CartAction;
use crate::cli::args::QtyArgs;
use crate::config::Config;
use crate::error::TrolleyResult;
use crate::ui::{self, UiContext};

/// Execute the qty command
pub fn execute(args: QtyArgs, config: &Config) -> TrolleyResult<()> {
    let ctx = UiContext::detect();

    let mut store = super::open_store(config);
    if store.find(&args.id).is_none() {
        ui::step_info(&ctx, &format!("No cart line for {}", args.id));
        return Ok(());
    }

    let view = store.apply(CartAction::ChangeQuantity {
        id: args.id.clone(),
        delta: args.delta,
    });
    match view.items.iter().find(|i| i.id == args.id) {
        Some(item) => ui::step_ok(&ctx, &format!("{} now at {}", args.id, item.quantity)),
        None => ui::step_ok(&ctx, &format!("Removed {}", args.id)),
    }
    ui::print_cart(&ctx, &view);

    Ok(())
}
