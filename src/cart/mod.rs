//! Cart data model
//!
//! A [`Cart`] is an ordered sequence of [`LineItem`]s, one per distinct
//! product id, each with a quantity of at least 1. It is mutated only
//! through [`store::CartStore`], persisted through [`persist`], and
//! rendered through [`crate::render`].

pub mod persist;
pub mod store;

pub use persist::{CartPersistence, JsonFilePersistence, MemoryPersistence};
pub use store::{CartAction, CartStore};

use crate::catalog::Product;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One product entry in the cart with its quantity
///
/// Price is captured when the item is added and never recomputed from
/// the catalog for the lifetime of the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Unique, opaque product identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Unit price at the time the item was added
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,

    /// Image URI
    pub image: String,

    /// Quantity in the cart, always >= 1
    pub quantity: u32,

    /// Size or variant label, if the product has one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
}

impl LineItem {
    /// Create a line item for a freshly added product
    pub fn new(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            image: product.image,
            quantity: 1,
            variant: product.variant,
        }
    }

    /// Price times quantity
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// The ordered collection of line items for the current session
///
/// Insertion order is stable across mutations except removal. Serializes
/// as a bare sequence of line items; that sequence is the persisted
/// state layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart
    pub fn new() -> Self {
        Self::default()
    }

    /// Line items in insertion order
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Whether the cart holds no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct line items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Find a line item by product id
    pub fn find(&self, id: &str) -> Option<&LineItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Total item count: sum of quantities
    pub fn total_quantity(&self) -> u32 {
        self.items
            .iter()
            .map(|item| item.quantity)
            .fold(0, u32::saturating_add)
    }

    /// Sum of price times quantity over all items
    pub fn subtotal(&self) -> Decimal {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// Whether the cart satisfies its own invariants: unique ids,
    /// quantities >= 1, non-negative prices
    ///
    /// Persisted data failing this check is treated as absent.
    pub fn is_well_formed(&self) -> bool {
        self.items.iter().enumerate().all(|(idx, item)| {
            item.quantity >= 1
                && !item.price.is_sign_negative()
                && !self.items[..idx].iter().any(|prev| prev.id == item.id)
        })
    }

    pub(crate) fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    pub(crate) fn find_mut(&mut self, id: &str) -> Option<&mut LineItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    pub(crate) fn push(&mut self, item: LineItem) {
        self.items.push(item);
    }

    pub(crate) fn take(&mut self, id: &str) -> Option<LineItem> {
        self.position(id).map(|idx| self.items.remove(idx))
    }
}
