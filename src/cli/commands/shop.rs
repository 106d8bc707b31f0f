//! Shop command - interactive storefront session
//!
//! A select-driven loop over the catalog and the cart. The cart pane
//! starts hidden; adding an item reveals it, and it can be toggled from
//! the menu. Every mutation goes through the cart store, so the view
//! printed at the top of each pass always reflects the persisted state.

use crate::cart::{CartAction, CartStore};
use crate::catalog::Catalog;
use crate::config::{Config, ConfigManager};
use crate::error::{TrolleyError, TrolleyResult};
use crate::panel::CartPane;
use crate::render::{format_price, EMPTY_CART_MESSAGE};
use crate::ui::{self, UiContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ShopChoice {
    Browse,
    Adjust,
    TogglePane,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineAction {
    Increase,
    Decrease,
    Remove,
}

/// Execute the shop command
pub fn execute(config: &Config) -> TrolleyResult<()> {
    let ctx = UiContext::detect();
    if !ctx.is_interactive() {
        return Err(TrolleyError::NonInteractive);
    }

    ui::init_theme();

    let catalog = Catalog::load(&ConfigManager::catalog_path(config))?;
    let panel = CartPane::shared();
    let mut store = super::open_store_with_panel(config, panel.clone());

    ui::intro(&ctx, &config.storefront.name);

    loop {
        let view = store.view();
        if panel.borrow().is_open() {
            ui::print_cart(&ctx, &view);
        } else {
            ui::print_badge(&ctx, &view);
        }

        let toggle_label = if panel.borrow().is_open() {
            "Hide cart"
        } else {
            "Show cart"
        };
        let choices = vec![
            (
                ShopChoice::Browse,
                "Browse products".to_string(),
                String::new(),
            ),
            (
                ShopChoice::Adjust,
                "Adjust cart".to_string(),
                format!("{} item(s)", view.item_count),
            ),
            (ShopChoice::TogglePane, toggle_label.to_string(), String::new()),
            (ShopChoice::Quit, "Leave the shop".to_string(), String::new()),
        ];

        let Some(choice) = ui::select(&ctx, "What next?", &choices)? else {
            break;
        };

        match choice {
            ShopChoice::Browse => browse(&ctx, &catalog, &mut store)?,
            ShopChoice::Adjust => adjust(&ctx, &mut store)?,
            ShopChoice::TogglePane => panel.borrow_mut().toggle(),
            ShopChoice::Quit => break,
        }
    }

    ui::outro_success(&ctx, "Come back soon.");
    Ok(())
}

/// Pick a product from the catalog and add one unit of it
fn browse(ctx: &UiContext, catalog: &Catalog, store: &mut CartStore) -> TrolleyResult<()> {
    if catalog.is_empty() {
        ui::step_info(ctx, "The catalog has no products");
        return Ok(());
    }

    let options: Vec<(String, String, String)> = catalog
        .products()
        .iter()
        .map(|p| (p.id.clone(), ui::product_label(p), format_price(p.price)))
        .collect();

    let Some(id) = ui::select(ctx, "Add to cart", &options)? else {
        return Ok(());
    };
    if let Some(product) = catalog.get(&id) {
        store.apply(CartAction::Add(product.clone()));
    }

    Ok(())
}

/// Pick a cart line and change its quantity or drop it
fn adjust(ctx: &UiContext, store: &mut CartStore) -> TrolleyResult<()> {
    let view = store.view();
    if view.is_empty() {
        ui::step_info(ctx, EMPTY_CART_MESSAGE);
        return Ok(());
    }

    let options: Vec<(String, String, String)> = view
        .items
        .iter()
        .map(|i| {
            (
                i.id.clone(),
                ui::line_label(i),
                format!("x{}, {}", i.quantity, i.line_total),
            )
        })
        .collect();

    let Some(id) = ui::select(ctx, "Which line?", &options)? else {
        return Ok(());
    };

    let actions = vec![
        (LineAction::Increase, "One more".to_string(), String::new()),
        (
            LineAction::Decrease,
            "One fewer".to_string(),
            "removes the line at zero".to_string(),
        ),
        (
            LineAction::Remove,
            "Remove the line".to_string(),
            String::new(),
        ),
    ];
    let Some(action) = ui::select(ctx, "Change it how?", &actions)? else {
        return Ok(());
    };

    match action {
        LineAction::Increase => store.apply(CartAction::ChangeQuantity { id, delta: 1 }),
        LineAction::Decrease => store.apply(CartAction::ChangeQuantity { id, delta: -1 }),
        LineAction::Remove => store.apply(CartAction::Remove(id)),
    };

    Ok(())
}
