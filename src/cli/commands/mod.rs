//! CLI command implementations

pub mod add;
pub mod catalog;
pub mod config;
pub mod init;
pub mod qty;
pub mod remove;
pub mod shop;
pub mod show;

pub use add::execute as add;
pub use catalog::execute as catalog;
pub use config::execute as config;
pub use init::execute as init;
pub use qty::execute as qty;
pub use remove::execute as remove;
pub use shop::execute as shop;
pub use show::execute as show;

use crate::cart::{CartStore, JsonFilePersistence};
use crate::config::{Config, ConfigManager};
use crate::panel::{NullPanel, SharedPanel};

/// Build the cart store a one-shot command works against
///
/// One-shot commands have no cart pane, so the store gets a null panel.
pub(crate) fn open_store(config: &Config) -> CartStore {
    open_store_with_panel(config, NullPanel::shared())
}

/// Build the cart store over the configured cart file and a given panel
pub(crate) fn open_store_with_panel(config: &Config, panel: SharedPanel) -> CartStore {
    let persistence = JsonFilePersistence::new(ConfigManager::cart_path(config));
    CartStore::new(Box::new(persistence), panel)
}
