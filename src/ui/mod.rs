//! UI module for consistent, modern CLI experience
//!
//! Uses `cliclack` (Rust port of @clack/prompts) for interactive prompts
//! with automatic fallback to plain output in CI/non-interactive environments.
//!
//! # Example
//!
//! ```rust,ignore
//! use trolley::ui::{self, UiContext};
//!
//! let ctx = UiContext::detect();
//!
//! ui::intro(&ctx, "Trolley & Co.");
//! ui::print_cart(&ctx, &store.view());
//!
//! let choice = ui::select(&ctx, "What next?", &options)?;
//!
//! ui::outro_success(&ctx, "Come back soon.");
//! ```

mod cart;
mod context;
mod output;
mod prompts;
mod theme;

pub use cart::{line_label, print_badge, print_cart, print_catalog, product_label};
pub use context::UiContext;
pub use output::{
    intro, key_value, outro_success, remark, step_info, step_ok, step_ok_detail, step_warn_hint,
};
pub use prompts::select;
pub use theme::{init_theme, TrolleyTheme};
