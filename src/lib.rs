//! Trolley - Storefront shopping cart for the terminal
//!
//! Keeps a persistent local cart over a product catalog, with one-shot
//! commands for scripting and an interactive shop session.

pub mod cart;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod panel;
pub mod render;
pub mod ui;

pub use error::{TrolleyError, TrolleyResult};
