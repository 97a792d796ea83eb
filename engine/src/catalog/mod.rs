//! Product records, the home page filter/sort and the product feed.

mod filter;
mod product;

pub use filter::{ALL_CATEGORIES, CategoryFilter, SortKey, categories, filter_sort, locale_cmp};
pub use product::{PLACEHOLDER_IMAGE, Product, display_category};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read products from {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse products: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Product {id} is invalid: {reason}")]
    InvalidProduct { id: u64, reason: String },
}

/// Presentation of the product collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    pub fn toggled(self) -> ViewMode {
        match self {
            ViewMode::Grid => ViewMode::List,
            ViewMode::List => ViewMode::Grid,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Grid => "grid",
            ViewMode::List => "list",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "grid" => Ok(ViewMode::Grid),
            "list" => Ok(ViewMode::List),
            other => Err(format!("Unknown view mode: '{other}'")),
        }
    }
}

/// Feed state consumed by the home page. The error is an opaque message to
/// display, never something to recover from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogFeed {
    pub items: Vec<Product>,
    pub loading: bool,
    pub error: Option<String>,
}

impl CatalogFeed {
    pub fn loading() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
            error: None,
        }
    }

    pub fn loaded(items: Vec<Product>) -> Self {
        Self {
            items,
            loading: false,
            error: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: Some(message.into()),
        }
    }

    pub fn from_result(result: Result<Vec<Product>, CatalogError>) -> Self {
        match result {
            Ok(items) => Self::loaded(items),
            Err(e) => Self::failed(e.to_string()),
        }
    }

    pub fn categories(&self) -> Vec<String> {
        categories(&self.items)
    }
}

/// Parse and validate a JSON array of products.
pub fn parse_products(content: &str) -> Result<Vec<Product>, CatalogError> {
    let products: Vec<Product> = serde_json::from_str(content)?;
    for product in &products {
        if !product.price.is_finite() || product.price < 0.0 {
            return Err(CatalogError::InvalidProduct {
                id: product.id,
                reason: format!("price must be a non-negative number, got {}", product.price),
            });
        }
        if product.discount > 100 {
            return Err(CatalogError::InvalidProduct {
                id: product.id,
                reason: format!("discount must be at most 100%, got {}%", product.discount),
            });
        }
    }
    Ok(products)
}

pub async fn load_products(path: &Path) -> Result<Vec<Product>, CatalogError> {
    log::debug!("Loading products from {}", path.display());
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    let products = parse_products(&content)?;
    log::info!("Loaded {} products from {}", products.len(), path.display());
    Ok(products)
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_matches, assert_ok};
    use std::io::Write;

    const PRODUCTS: &str = r#"[
        {"id": 1, "title": "Headphones", "price": 89.99, "description": "Noise cancelling", "category": "electronics", "image": "https://example.com/h.jpg", "discount": 10},
        {"id": 2, "title": "Novel", "price": 12.0, "description": "Paperback", "category": "books", "image": ""}
    ]"#;

    #[test]
    fn test_parse_products() {
        let products = assert_ok!(parse_products(PRODUCTS));
        assert_eq!(products.len(), 2);
        assert_eq!(products[1].discount, 0);
    }

    #[test]
    fn test_negative_price_rejected() {
        let content = PRODUCTS.replace("12.0", "-1.0");
        assert_matches!(
            parse_products(&content),
            Err(CatalogError::InvalidProduct { id: 2, .. })
        );
    }

    #[test]
    fn test_feed_from_error_is_opaque_message() {
        let feed = CatalogFeed::from_result(parse_products("{not json"));
        assert!(!feed.loading);
        assert!(feed.items.is_empty());
        assert!(feed.error.unwrap().starts_with("Failed to parse products"));
    }

    #[test]
    fn test_view_mode_toggle() {
        assert_eq!(ViewMode::Grid.toggled(), ViewMode::List);
        assert_eq!(ViewMode::List.toggled(), ViewMode::Grid);
        assert_eq!("LIST".parse::<ViewMode>(), Ok(ViewMode::List));
    }

    #[tokio::test]
    async fn test_load_products_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(PRODUCTS.as_bytes()).unwrap();

        let products = load_products(file.path()).await.unwrap();
        assert_eq!(products[0].title, "Headphones");
        assert_eq!(
            CatalogFeed::loaded(products).categories(),
            vec!["all", "electronics", "books"]
        );
    }

    #[tokio::test]
    async fn test_load_products_missing_file() {
        let result = load_products(Path::new("/no/such/products.json")).await;
        assert_matches!(result, Err(CatalogError::Read { .. }));
    }
}
