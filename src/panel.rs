//! Cart pane visibility
//!
//! The cart store collaborates with whatever surface displays the cart
//! through a narrow capability: query visibility, reveal, toggle. The
//! interactive shop session plugs in a real pane; one-shot commands plug
//! in a null pane that is always considered open so the store never
//! tries to reveal anything.

use std::cell::RefCell;
use std::rc::Rc;

/// Controls the visibility of the cart pane
pub trait PanelController {
    /// Whether the pane is currently shown
    fn is_open(&self) -> bool;

    /// Show the pane; showing an already-open pane is a no-op
    fn open(&mut self);

    /// Flip the pane between shown and hidden
    fn toggle(&mut self);
}

/// Shared handle to a panel controller
///
/// The store and the session loop both need to drive the same pane, so
/// it travels behind a shared mutable handle.
pub type SharedPanel = Rc<RefCell<dyn PanelController>>;

/// The interactive session's cart pane; starts hidden
#[derive(Debug, Default)]
pub struct CartPane {
    open: bool,
}

impl CartPane {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a fresh pane in a shared handle
    pub fn shared() -> SharedPanel {
        Rc::new(RefCell::new(Self::new()))
    }
}

impl PanelController for CartPane {
    fn is_open(&self) -> bool {
        self.open
    }

    fn open(&mut self) {
        self.open = true;
    }

    fn toggle(&mut self) {
        self.open = !self.open;
    }
}

/// Panel for contexts without a pane to reveal
///
/// Always reads as open, so the store's reveal-after-add step does
/// nothing.
#[derive(Debug, Default)]
pub struct NullPanel;

impl NullPanel {
    pub fn shared() -> SharedPanel {
        Rc::new(RefCell::new(Self))
    }
}

impl PanelController for NullPanel {
    fn is_open(&self) -> bool {
        true
    }

    fn open(&mut self) {}

    fn toggle(&mut self) {}
}
