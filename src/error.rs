//! Error types for Trolley
//!
//! All modules use `TrolleyResult<T>` as their return type. Cart store
//! mutations are deliberately infallible (see `cart::store`); these errors
//! belong to the outer surface: configuration, catalog, and file IO.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Trolley operations
pub type TrolleyResult<T> = Result<T, TrolleyError>;

/// All errors that can occur in Trolley
#[derive(Error, Debug)]
pub enum TrolleyError {
    // Configuration errors
    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("Failed to create config directory {path}: {source}")]
    ConfigDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unknown configuration key: {0}")]
    ConfigKeyUnknown(String),

    // Catalog errors
    #[error("Catalog not found: {0}")]
    CatalogNotFound(PathBuf),

    #[error("Invalid catalog at {path}: {reason}")]
    CatalogInvalid { path: PathBuf, reason: String },

    #[error("Unknown product: {0}")]
    UnknownProduct(String),

    // Interaction errors
    #[error("This command needs an interactive terminal")]
    NonInteractive,

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    // General errors
    #[error("{0}")]
    User(String),
}

impl TrolleyError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::CatalogNotFound(_) => Some("Run: trolley init"),
            Self::UnknownProduct(_) => Some("Run: trolley catalog to list available products"),
            Self::ConfigKeyUnknown(_) => {
                Some("Valid keys: storefront.name, cart.file, catalog.file")
            }
            Self::NonInteractive => {
                Some("Use the one-shot commands instead: add, remove, qty, show")
            }
            _ => None,
        }
    }
}
