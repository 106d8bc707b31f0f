//! Cart view models
//!
//! Pure projection of cart state into display-ready values. Every
//! mutation on the store re-derives the whole view from scratch, so
//! callers never patch a stale view; equal carts always project to
//! equal views.

use crate::cart::{Cart, LineItem};
use rust_decimal::Decimal;
use serde::Serialize;

/// What an empty cart displays in place of line items
pub const EMPTY_CART_MESSAGE: &str = "Your cart is empty.";

/// One cart line, ready to display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineItemView {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
    pub image: String,
    pub quantity: u32,
    pub unit_price: String,
    pub line_total: String,
}

impl From<&LineItem> for LineItemView {
    fn from(item: &LineItem) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            variant: item.variant.clone(),
            image: item.image.clone(),
            quantity: item.quantity,
            unit_price: format_price(item.price),
            line_total: format_price(item.line_total()),
        }
    }
}

/// The whole cart, ready to display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartView {
    pub items: Vec<LineItemView>,
    pub subtotal: String,
    pub item_count: u32,
}

impl CartView {
    /// The view of a cart with nothing in it
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            subtotal: format_price(Decimal::ZERO),
            item_count: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Unit count for the cart badge; `None` when the badge is hidden
    pub fn badge(&self) -> Option<u32> {
        (self.item_count > 0).then_some(self.item_count)
    }
}

/// Project a cart into its display form
pub fn cart_view(cart: &Cart) -> CartView {
    CartView {
        items: cart.items().iter().map(LineItemView::from).collect(),
        subtotal: format_price(cart.subtotal()),
        item_count: cart.total_quantity(),
    }
}

/// Format a money amount as `$XX.XX`
pub fn format_price(amount: Decimal) -> String {
    format!("${amount:.2}")
}
