//! Configuration schema for Trolley
//!
//! Configuration is stored at `~/.config/trolley/config.toml`

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Storefront presentation settings
    pub storefront: StorefrontConfig,

    /// Cart persistence settings
    pub cart: CartConfig,

    /// Product catalog settings
    pub catalog: CatalogConfig,
}

/// Storefront presentation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Name shown in the interactive shop banner
    pub name: String,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            name: "Trolley & Co.".to_string(),
        }
    }
}

/// Cart persistence settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CartConfig {
    /// Cart file path (defaults to `<state_dir>/trolley/cart.json`)
    pub file: Option<PathBuf>,
}

/// Product catalog settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Catalog file path (defaults to `~/.config/trolley/catalog.toml`)
    pub file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_serializes() {
        let config = Config::default();
        let toml = toml::to_string_pretty(&config).unwrap();
        assert!(toml.contains("[storefront]"));
        assert!(toml.contains("Trolley & Co."));
    }

    #[test]
    fn config_deserializes_empty() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.storefront.name, "Trolley & Co.");
        assert!(config.cart.file.is_none());
    }

    #[test]
    fn config_deserializes_partial() {
        let toml = r#"
            [cart]
            file = "/tmp/cart.json"
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.cart.file, Some(PathBuf::from("/tmp/cart.json")));
        assert_eq!(config.storefront.name, "Trolley & Co."); // default preserved
    }
}
