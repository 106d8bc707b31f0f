//! Cart state store
//!
//! Owns the in-memory cart and is the only writer to it. Every mutation
//! runs the same sequence: update state, persist, project a fresh view.
//! Persistence failures are logged and swallowed; the in-memory cart
//! stays authoritative for the rest of the session, so callers always
//! get a view that reflects what they just did.

use crate::cart::persist::CartPersistence;
use crate::cart::{Cart, LineItem};
use crate::catalog::Product;
use crate::panel::SharedPanel;
use crate::render::{cart_view, CartView};
use tracing::{debug, info, warn};

/// A requested cart mutation
#[derive(Debug, Clone)]
pub enum CartAction {
    /// Add one unit of a product, merging into an existing line
    Add(Product),
    /// Drop a line entirely by product id
    Remove(String),
    /// Adjust a line's quantity by a signed amount
    ChangeQuantity { id: String, delta: i64 },
}

/// The cart's single owner: holds state, persists it, projects views
pub struct CartStore {
    cart: Cart,
    persistence: Box<dyn CartPersistence>,
    panel: SharedPanel,
}

impl CartStore {
    /// Build a store over a persistence backend and a cart pane
    ///
    /// The persisted cart is loaded eagerly; whatever it contains is the
    /// session's starting state.
    pub fn new(persistence: Box<dyn CartPersistence>, panel: SharedPanel) -> Self {
        let cart = persistence.load();
        debug!("Cart loaded with {} line(s)", cart.len());
        Self {
            cart,
            persistence,
            panel,
        }
    }

    /// Project the current cart into its display form
    pub fn view(&self) -> CartView {
        cart_view(&self.cart)
    }

    /// Look up a cart line by product id
    pub fn find(&self, id: &str) -> Option<&LineItem> {
        self.cart.find(id)
    }

    /// Dispatch a requested mutation
    pub fn apply(&mut self, action: CartAction) -> CartView {
        match action {
            CartAction::Add(product) => self.add_item(&product),
            CartAction::Remove(id) => self.remove_item(&id),
            CartAction::ChangeQuantity { id, delta } => self.change_quantity(&id, delta),
        }
    }

    /// Add one unit of a product
    ///
    /// An existing line for the same id gains one unit and keeps the
    /// price it was first added at; otherwise a new line is appended.
    /// Afterwards the cart pane is revealed if it was hidden.
    pub fn add_item(&mut self, product: &Product) -> CartView {
        match self.cart.find_mut(&product.id) {
            Some(item) => {
                item.quantity = item.quantity.saturating_add(1);
                info!("Added another {} (now {})", product.id, item.quantity);
            }
            None => {
                self.cart.push(LineItem::new(product.clone()));
                info!("Added {} to cart", product.id);
            }
        }
        self.persist();
        let view = self.view();
        self.reveal_pane();
        view
    }

    /// Drop a line by product id
    ///
    /// Removing an id that is not in the cart still persists, leaving
    /// the stored state equal to the in-memory state either way.
    pub fn remove_item(&mut self, id: &str) -> CartView {
        match self.cart.take(id) {
            Some(item) => info!("Removed {} from cart", item.id),
            None => debug!("Remove for {id} matched nothing"),
        }
        self.persist();
        self.view()
    }

    /// Adjust a line's quantity by a signed amount
    ///
    /// A resulting quantity at or below zero removes the line. An id
    /// with no line is a true no-op: nothing changes and nothing is
    /// persisted.
    pub fn change_quantity(&mut self, id: &str, delta: i64) -> CartView {
        let Some(current) = self.find(id).map(|item| i64::from(item.quantity)) else {
            debug!("Quantity change for {id} matched nothing");
            return self.view();
        };

        let next = current.saturating_add(delta);
        if next <= 0 {
            return self.remove_item(id);
        }

        if let Some(item) = self.cart.find_mut(id) {
            item.quantity = u32::try_from(next).unwrap_or(u32::MAX);
            info!("Set {} quantity to {}", id, item.quantity);
        }
        self.persist();
        self.view()
    }

    fn persist(&mut self) {
        if let Err(e) = self.persistence.save(&self.cart) {
            warn!("Cart not persisted: {e}");
        }
    }

    fn reveal_pane(&self) {
        let mut panel = self.panel.borrow_mut();
        if !panel.is_open() {
            panel.open();
        }
    }
}
