use super::product::Product;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Literal option that disables category filtering.
pub const ALL_CATEGORIES: &str = "all";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Name,
    Price,
    Category,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Name, SortKey::Price, SortKey::Category];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Price => "price",
            SortKey::Category => "category",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Name => "Sort by Name",
            SortKey::Price => "Sort by Price",
            SortKey::Category => "Sort by Category",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "name" => Ok(SortKey::Name),
            "price" => Ok(SortKey::Price),
            "category" => Ok(SortKey::Category),
            other => Err(format!("Unknown sort key: '{other}'")),
        }
    }
}

/// `all`, or one exact category label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Named(String),
}

impl CategoryFilter {
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Named(name) => name == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str(ALL_CATEGORIES),
            CategoryFilter::Named(name) => f.write_str(name),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL_CATEGORIES {
            Ok(CategoryFilter::All)
        } else {
            Ok(CategoryFilter::Named(s.to_string()))
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(filter) => filter,
            Err(never) => match never {},
        }
    }
}

/// Locale-style ordering: case-insensitive first, lowercase before uppercase on ties.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let folded = a.to_lowercase().cmp(&b.to_lowercase());
    if folded != Ordering::Equal {
        return folded;
    }
    a.chars()
        .map(char::is_uppercase)
        .cmp(b.chars().map(char::is_uppercase))
}

/// Filter by search term and category, then stable-sort by `sort`.
///
/// The term matches case-insensitively against the title or the description.
/// Ties in the sort key keep their input order.
pub fn filter_sort(
    products: &[Product],
    search_term: &str,
    category: &CategoryFilter,
    sort: SortKey,
) -> Vec<Product> {
    let term = search_term.to_lowercase();

    let mut filtered: Vec<Product> = products
        .iter()
        .filter(|product| {
            let matches_search = product.title.to_lowercase().contains(&term)
                || product.description.to_lowercase().contains(&term);
            matches_search && category.matches(&product.category)
        })
        .cloned()
        .collect();

    // `sort_by` is stable
    match sort {
        SortKey::Name => filtered.sort_by(|a, b| locale_cmp(&a.title, &b.title)),
        SortKey::Category => filtered.sort_by(|a, b| locale_cmp(&a.category, &b.category)),
        SortKey::Price => filtered.sort_by(|a, b| a.price.total_cmp(&b.price)),
    }

    filtered
}

/// `all` followed by each distinct category in first-seen order.
pub fn categories(products: &[Product]) -> Vec<String> {
    let mut result = vec![ALL_CATEGORIES.to_string()];
    for product in products {
        if !result[1..].contains(&product.category) {
            result.push(product.category.clone());
        }
    }
    result
}
