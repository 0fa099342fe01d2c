//! Catalog query: filtering and sorting over the product list.

use crate::catalog::{Catalog, Category, CategoryFilter, Product};
use crate::search::filter::{matches_text, PriceRange};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Sort order for query results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortKey {
    /// By display name, A-Z (case-insensitive). The default.
    #[default]
    Name,
    /// By price, low to high.
    PriceLowHigh,
    /// By price, high to low.
    PriceHighLow,
}

impl SortKey {
    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::Name => "Name: A-Z",
            SortKey::PriceLowHigh => "Price: Low to High",
            SortKey::PriceHighLow => "Price: High to Low",
        }
    }

    fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortKey::PriceLowHigh => a.price.amount_cents.cmp(&b.price.amount_cents),
            SortKey::PriceHighLow => b.price.amount_cents.cmp(&a.price.amount_cents),
        }
    }
}

/// A query over the product catalog.
///
/// Category, search text, and price range compose by conjunction; the sort is
/// applied last. The defaults (all categories, no text, unbounded prices,
/// name sort) return the whole catalog in name order.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CatalogQuery {
    /// Category filter.
    pub category: CategoryFilter,
    /// Free-text search over name and description. Empty means unset.
    pub search: Option<String>,
    /// Inclusive price range.
    pub price: PriceRange,
    /// Sort order.
    pub sort: SortKey,
}

impl CatalogQuery {
    /// Create a query with the default (match-everything) settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to a single category.
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = CategoryFilter::Only(category);
        self
    }

    /// Set the free-text search. An empty string leaves the query unset.
    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        if !text.is_empty() {
            self.search = Some(text);
        }
        self
    }

    /// Set the price range.
    pub fn with_price_range(mut self, price: PriceRange) -> Self {
        self.price = price;
        self
    }

    /// Set the sort order.
    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Run the query against a catalog.
    pub fn execute(&self, catalog: &Catalog) -> Vec<Product> {
        self.execute_slice(catalog.as_slice())
    }

    /// Run the query against a product snapshot.
    ///
    /// The sort is stable: products equal under the sort key keep their
    /// relative catalog order. An empty result is a valid output.
    pub fn execute_slice(&self, products: &[Product]) -> Vec<Product> {
        let needle = self
            .search
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);

        let mut results: Vec<Product> = products
            .iter()
            .filter(|p| self.category.matches(p.category))
            .filter(|p| match &needle {
                Some(needle) => matches_text(p, needle),
                None => true,
            })
            .filter(|p| self.price.contains(p.price))
            .cloned()
            .collect();

        results.sort_by(|a, b| self.sort.compare(a, b));
        results
    }
}
