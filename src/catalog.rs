//! Product catalog
//!
//! The catalog is the storefront shelf: the set of products an "add to
//! cart" action can reference, each carrying the data the cart needs
//! (id, name, price, image, optional variant). It lives in a TOML file
//! (`~/.config/trolley/catalog.toml` by default) written by `trolley init`.

use crate::error::{TrolleyError, TrolleyResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Starter catalog written by `trolley init`
pub const STARTER_CATALOG: &str = r#"# Trolley catalog - products available in the storefront
# Prices are decimal strings; variant is optional.

[[product]]
id = "tee-onyx"
name = "Onyx Tee"
price = "24.00"
image = "img/tee-onyx.png"
variant = "M"

[[product]]
id = "shirt-oxford"
name = "Oxford Shirt"
price = "58.00"
image = "img/shirt-oxford.png"
variant = "L"

[[product]]
id = "hoodie-harbor"
name = "Harbor Hoodie"
price = "72.00"
image = "img/hoodie-harbor.png"

[[product]]
id = "cap-canvas"
name = "Canvas Cap"
price = "28.00"
image = "img/cap-canvas.png"

[[product]]
id = "tote-kraft"
name = "Kraft Tote"
price = "18.50"
image = "img/tote-kraft.png"
"#;

/// A product as offered by the storefront
///
/// This is the payload an add-to-cart action carries; the cart copies
/// these fields into its own line items and never looks them up again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique, opaque product identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Unit price
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,

    /// Image URI
    pub image: String,

    /// Size or variant label, if the product has one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
}

/// Product catalog loaded from a TOML file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    /// Products in shelf order
    #[serde(rename = "product", default)]
    products: Vec<Product>,
}

impl Catalog {
    /// Load the catalog from a file
    ///
    /// Rejects products with negative prices; the cart copies prices
    /// unchecked, so they must be valid before they can be added.
    pub fn load(path: &Path) -> TrolleyResult<Self> {
        if !path.exists() {
            return Err(TrolleyError::CatalogNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)
            .map_err(|e| TrolleyError::io(format!("reading catalog {}", path.display()), e))?;

        let catalog: Self = toml::from_str(&content).map_err(|e| TrolleyError::CatalogInvalid {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        if let Some(bad) = catalog.products.iter().find(|p| p.price.is_sign_negative()) {
            return Err(TrolleyError::CatalogInvalid {
                path: path.to_path_buf(),
                reason: format!("product {} has a negative price ({})", bad.id, bad.price),
            });
        }

        Ok(catalog)
    }

    /// Look up a product by id
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// All products in shelf order
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Whether the catalog has no products
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Number of products
    pub fn len(&self) -> usize {
        self.products.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn starter_catalog_parses() {
        let catalog: Catalog = toml::from_str(STARTER_CATALOG).unwrap();
        assert!(catalog.len() >= 4);

        let tee = catalog.get("tee-onyx").unwrap();
        assert_eq!(tee.name, "Onyx Tee");
        assert_eq!(tee.price, Decimal::new(2400, 2));
        assert_eq!(tee.variant.as_deref(), Some("M"));

        let cap = catalog.get("cap-canvas").unwrap();
        assert!(cap.variant.is_none());
    }

    #[test]
    fn load_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("catalog.toml");
        fs::write(&path, STARTER_CATALOG).unwrap();

        let catalog = Catalog::load(&path).unwrap();
        assert!(catalog.get("shirt-oxford").is_some());
        assert!(catalog.get("nonexistent").is_none());
    }

    #[test]
    fn missing_catalog_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("absent.toml");

        assert!(matches!(
            Catalog::load(&path),
            Err(TrolleyError::CatalogNotFound(_))
        ));
    }

    #[test]
    fn invalid_catalog_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("catalog.toml");
        fs::write(&path, "[[product]]\nid = 5\n").unwrap();

        assert!(matches!(
            Catalog::load(&path),
            Err(TrolleyError::CatalogInvalid { .. })
        ));
    }

    #[test]
    fn negative_price_is_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("catalog.toml");
        fs::write(
            &path,
            "[[product]]\nid = \"mispriced-tee\"\nname = \"Mispriced Tee\"\nprice = \"-5.00\"\nimage = \"img/tee.png\"\n",
        )
        .unwrap();

        match Catalog::load(&path) {
            Err(TrolleyError::CatalogInvalid { reason, .. }) => {
                assert!(reason.contains("mispriced-tee"));
                assert!(reason.contains("negative"));
            }
            other => panic!("expected an invalid-catalog error, got {other:?}"),
        }
    }
}
