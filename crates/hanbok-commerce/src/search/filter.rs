//! Catalog query predicates.

use crate::catalog::Product;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// An inclusive price range. `None` bounds are unbounded.
///
/// Bounds are compared in the smallest currency unit; the catalog prices in a
/// single currency, so no cross-currency conversion is attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PriceRange {
    /// Lower bound, inclusive.
    pub min: Option<Money>,
    /// Upper bound, inclusive.
    pub max: Option<Money>,
}

impl PriceRange {
    /// An unbounded range (matches every price).
    pub fn any() -> Self {
        Self::default()
    }

    /// A range bounded on both ends.
    pub fn between(min: Money, max: Money) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    /// A range bounded below only.
    pub fn at_least(min: Money) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    /// A range bounded above only.
    pub fn at_most(max: Money) -> Self {
        Self {
            min: None,
            max: Some(max),
        }
    }

    /// Check whether a price falls inside the range.
    pub fn contains(&self, price: Money) -> bool {
        if let Some(min) = self.min {
            if price.amount_cents < min.amount_cents {
                return false;
            }
        }
        if let Some(max) = self.max {
            if price.amount_cents > max.amount_cents {
                return false;
            }
        }
        true
    }
}

/// Case-insensitive substring match of the search text against the product's
/// name or description (OR semantics, untokenized).
pub(crate) fn matches_text(product: &Product, needle_lower: &str) -> bool {
    product.name.to_lowercase().contains(needle_lower)
        || product.description.to_lowercase().contains(needle_lower)
}
