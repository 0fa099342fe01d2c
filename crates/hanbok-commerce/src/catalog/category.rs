//! Product categories.
//!
//! The storefront uses a small fixed set of categories, so they are a closed
//! enum rather than free-form strings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Casual,
    Wedding,
    Children,
    Modern,
    Accessories,
}

impl Category {
    /// All categories, in storefront navigation order.
    pub const ALL: [Category; 5] = [
        Category::Casual,
        Category::Wedding,
        Category::Children,
        Category::Modern,
        Category::Accessories,
    ];

    /// Get the display name (also the serialized form).
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Casual => "Casual",
            Category::Wedding => "Wedding",
            Category::Children => "Children",
            Category::Modern => "Modern",
            Category::Accessories => "Accessories",
        }
    }
}

impl FromStr for Category {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Casual" => Ok(Category::Casual),
            "Wedding" => Ok(Category::Wedding),
            "Children" => Ok(Category::Children),
            "Modern" => Ok(Category::Modern),
            "Accessories" => Ok(Category::Accessories),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Category selection on the catalog query surface.
///
/// "All" is a sentinel of the query, not a category a product can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CategoryFilter {
    /// Keep every product.
    #[default]
    All,
    /// Keep only products in the given category.
    Only(Category),
}

impl CategoryFilter {
    /// Check whether a product category passes this filter.
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trip() {
        for c in Category::ALL {
            assert_eq!(c.as_str().parse::<Category>(), Ok(c));
        }
    }

    #[test]
    fn test_category_parse_rejects_unknown() {
        assert!("Formalwear".parse::<Category>().is_err());
        // Exact match only, case-sensitive
        assert!("wedding".parse::<Category>().is_err());
    }

    #[test]
    fn test_filter_all_matches_everything() {
        for c in Category::ALL {
            assert!(CategoryFilter::All.matches(c));
        }
    }

    #[test]
    fn test_filter_only_matches_exactly() {
        let f = CategoryFilter::Only(Category::Wedding);
        assert!(f.matches(Category::Wedding));
        assert!(!f.matches(Category::Casual));
    }
}
