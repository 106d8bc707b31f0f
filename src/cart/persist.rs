//! Cart persistence
//!
//! The durable boundary for cart state: one record, the serialized
//! sequence of line items, replaced wholesale on every save. Reads that
//! fail for any reason (missing file, unreadable file, unparsable or
//! ill-formed contents) yield an empty cart, never an error; a freshly
//! started session must come up regardless of what is on disk.
//!
//! No cross-process coordination is attempted: two concurrent trolley
//! invocations are last-writer-wins, and each one sees the other's
//! mutations only at its next construction.

use crate::cart::Cart;
use crate::error::{TrolleyError, TrolleyResult};
use std::cell::{Cell, RefCell};
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;
use tracing::debug;

/// Durable read/write boundary for cart state
pub trait CartPersistence {
    /// Load the persisted cart; missing or malformed data yields an
    /// empty cart
    fn load(&self) -> Cart;

    /// Persist the full cart state, replacing any prior value
    fn save(&mut self, cart: &Cart) -> TrolleyResult<()>;
}

/// Cart persistence backed by a JSON file
#[derive(Debug, Clone)]
pub struct JsonFilePersistence {
    path: PathBuf,
}

impl JsonFilePersistence {
    /// Create a persistence adapter for the given file path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl CartPersistence for JsonFilePersistence {
    fn load(&self) -> Cart {
        if !self.path.exists() {
            debug!("No cart file at {}, starting empty", self.path.display());
            return Cart::new();
        }

        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                debug!("Cart file unreadable ({e}), starting empty");
                return Cart::new();
            }
        };

        match serde_json::from_str::<Cart>(&content) {
            Ok(cart) if cart.is_well_formed() => cart,
            Ok(_) => {
                debug!("Stored cart violates its invariants, starting empty");
                Cart::new()
            }
            Err(e) => {
                debug!("Stored cart unparsable ({e}), starting empty");
                Cart::new()
            }
        }
    }

    fn save(&mut self, cart: &Cart) -> TrolleyResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| TrolleyError::io("creating cart directory", e))?;
        }

        let content = serde_json::to_string_pretty(cart)?;
        fs::write(&self.path, content).map_err(|e| {
            TrolleyError::io(format!("writing cart file {}", self.path.display()), e)
        })?;

        Ok(())
    }
}

/// In-memory cart persistence for tests and documentation examples
///
/// Clones share the same slot, so a handle kept by a test observes every
/// save made through the clone injected into a store.
#[derive(Debug, Clone, Default)]
pub struct MemoryPersistence {
    slot: Rc<RefCell<Option<Cart>>>,
    saves: Rc<Cell<usize>>,
}

impl MemoryPersistence {
    /// Create an empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an in-memory store pre-seeded with a cart
    pub fn with_cart(cart: Cart) -> Self {
        let persistence = Self::new();
        *persistence.slot.borrow_mut() = Some(cart);
        persistence
    }

    /// The last saved cart, if any save happened or a seed was given
    pub fn contents(&self) -> Option<Cart> {
        self.slot.borrow().clone()
    }

    /// How many saves have been made
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl CartPersistence for MemoryPersistence {
    fn load(&self) -> Cart {
        self.slot.borrow().clone().unwrap_or_default()
    }

    fn save(&mut self, cart: &Cart) -> TrolleyResult<()> {
        *self.slot.borrow_mut() = Some(cart.clone());
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}
