//! Terminal rendering of cart and catalog views

use super::context::UiContext;
use super::output;
use crate::catalog::Product;
use crate::render::{format_price, CartView, LineItemView, EMPTY_CART_MESSAGE};
use console::style;

/// Display name for a cart line, with its variant when there is one
pub fn line_label(item: &LineItemView) -> String {
    match &item.variant {
        Some(variant) => format!("{} ({})", item.name, variant),
        None => item.name.clone(),
    }
}

/// Display name for a catalog product, with its variant when there is one
pub fn product_label(product: &Product) -> String {
    match &product.variant {
        Some(variant) => format!("{} ({})", product.name, variant),
        None => product.name.clone(),
    }
}

/// Print the cart as an aligned table, or the empty-cart message
pub fn print_cart(ctx: &UiContext, view: &CartView) {
    if view.is_empty() {
        println!("  {}", style(EMPTY_CART_MESSAGE).dim());
        return;
    }

    let rows: Vec<(String, String, String, String, String)> = view
        .items
        .iter()
        .map(|item| {
            (
                item.id.clone(),
                line_label(item),
                item.quantity.to_string(),
                item.unit_price.clone(),
                item.line_total.clone(),
            )
        })
        .collect();

    let id_w = column_width("ID", rows.iter().map(|r| r.0.len()));
    let item_w = column_width("ITEM", rows.iter().map(|r| r.1.len()));
    let qty_w = column_width("QTY", rows.iter().map(|r| r.2.len()));
    let unit_w = column_width("UNIT", rows.iter().map(|r| r.3.len()));
    let total_w = column_width("TOTAL", rows.iter().map(|r| r.4.len()));

    println!(
        "  {}",
        style(format!(
            "{:<id_w$}  {:<item_w$}  {:>qty_w$}  {:>unit_w$}  {:>total_w$}",
            "ID", "ITEM", "QTY", "UNIT", "TOTAL"
        ))
        .dim()
    );
    for (id, item, qty, unit, total) in &rows {
        println!(
            "  {:<id_w$}  {:<item_w$}  {:>qty_w$}  {:>unit_w$}  {:>total_w$}",
            id, item, qty, unit, total
        );
    }

    println!();
    output::key_value(
        ctx,
        "Subtotal",
        &format!("{} ({} item(s))", view.subtotal, view.item_count),
    );
}

/// Print the badge-style one-line cart summary; hidden when empty
pub fn print_badge(ctx: &UiContext, view: &CartView) {
    if let Some(count) = view.badge() {
        output::key_value(ctx, "Cart", &format!("{count} item(s), {}", view.subtotal));
    }
}

/// Print the catalog as an aligned table
pub fn print_catalog(ctx: &UiContext, products: &[Product]) {
    if products.is_empty() {
        output::step_info(ctx, "The catalog has no products");
        return;
    }

    let rows: Vec<(String, String, String)> = products
        .iter()
        .map(|p| (p.id.clone(), product_label(p), format_price(p.price)))
        .collect();

    let id_w = column_width("ID", rows.iter().map(|r| r.0.len()));
    let name_w = column_width("PRODUCT", rows.iter().map(|r| r.1.len()));
    let price_w = column_width("PRICE", rows.iter().map(|r| r.2.len()));

    println!(
        "  {}",
        style(format!(
            "{:<id_w$}  {:<name_w$}  {:>price_w$}",
            "ID", "PRODUCT", "PRICE"
        ))
        .dim()
    );
    for (id, name, price) in &rows {
        println!("  {:<id_w$}  {:<name_w$}  {:>price_w$}", id, name, price);
    }
}

fn column_width(header: &str, cells: impl Iterator<Item = usize>) -> usize {
    cells.fold(header.len(), usize::max)
}
