use engine::catalog::{SortKey, ViewMode};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_PRODUCTS_PATH: &str = "data/products.json";

/// `[catalog]` section
#[derive(Debug, Deserialize, Default, Clone)]
pub struct CatalogConfig {
    products_path: Option<PathBuf>,
    default_view: Option<ViewMode>,
    default_sort: Option<SortKey>,
    /// Give up on the product load after this many seconds
    load_timeout_secs: Option<u64>,
}

impl CatalogConfig {
    pub fn products_path(&self) -> &Path {
        self.products_path
            .as_deref()
            .unwrap_or(Path::new(DEFAULT_PRODUCTS_PATH))
    }

    pub fn default_view(&self) -> ViewMode {
        self.default_view.unwrap_or_default()
    }

    pub fn default_sort(&self) -> SortKey {
        self.default_sort.unwrap_or_default()
    }

    pub fn load_timeout_secs(&self) -> u64 {
        self.load_timeout_secs.unwrap_or(10)
    }
}
