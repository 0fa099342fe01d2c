//! Product and catalog types.

use crate::catalog::Category;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Products are reference data: loaded once at startup and never mutated by
/// the cart or query layers. Every product offers at least one size and one
/// color; the constructor enforces this.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Image asset reference.
    pub image: String,
    /// Product category.
    pub category: Category,
    /// Full description.
    pub description: String,
    /// Available sizes, in display order.
    pub sizes: Vec<String>,
    /// Available colors, in display order.
    pub colors: Vec<String>,
}

impl Product {
    /// Create a new product.
    ///
    /// Returns an error if the price is negative or either option list is empty.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: Money,
        image: impl Into<String>,
        category: Category,
        description: impl Into<String>,
        sizes: Vec<String>,
        colors: Vec<String>,
    ) -> Result<Self, CommerceError> {
        if price.amount_cents < 0 {
            return Err(CommerceError::InvalidProduct {
                id: id.as_str().to_string(),
                reason: "price must be non-negative".to_string(),
            });
        }
        if sizes.is_empty() {
            return Err(CommerceError::InvalidProduct {
                id: id.as_str().to_string(),
                reason: "at least one size is required".to_string(),
            });
        }
        if colors.is_empty() {
            return Err(CommerceError::InvalidProduct {
                id: id.as_str().to_string(),
                reason: "at least one color is required".to_string(),
            });
        }
        Ok(Self {
            id,
            name: name.into(),
            price,
            image: image.into(),
            category,
            description: description.into(),
            sizes,
            colors,
        })
    }

    /// Check whether the product offers the given size.
    pub fn has_size(&self, size: &str) -> bool {
        self.sizes.iter().any(|s| s == size)
    }

    /// Check whether the product offers the given color.
    pub fn has_color(&self, color: &str) -> bool {
        self.colors.iter().any(|c| c == color)
    }

    /// The first listed size (the storefront's default selection).
    pub fn default_size(&self) -> &str {
        &self.sizes[0]
    }

    /// The first listed color (the storefront's default selection).
    pub fn default_color(&self) -> &str {
        &self.colors[0]
    }
}

/// The immutable product catalog.
///
/// An ordered, read-only collection consulted by the listing and detail
/// surfaces. Order is the order products were loaded in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from a product list.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Look up a product by ID.
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Iterate over all products in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// The products as a slice, in catalog order.
    pub fn as_slice(&self) -> &[Product] {
        &self.products
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
