//! Commerce domain types and logic for the Hanbok storefront.
//!
//! Everything is in-memory: the catalog is seeded demo data, authentication
//! checks hardcoded accounts, and checkout simulates its backend with an
//! artificial delay. The crate provides:
//!
//! - **Catalog**: products, the closed category set, and the seeded demo list
//! - **Cart**: insertion-ordered line items merged by (product, size, color),
//!   with a total recomputed after every mutation
//! - **Search**: category/text/price filtering and sorting over the catalog
//! - **Auth**: mock login/register/logout session
//! - **Checkout**: order placement from a cart snapshot
//!
//! # Example
//!
//! ```
//! use hanbok_commerce::prelude::*;
//!
//! let catalog = demo_catalog();
//!
//! // Find silk wedding wear.
//! let results = CatalogQuery::new()
//!     .with_category(Category::Wedding)
//!     .with_search("silk")
//!     .execute(&catalog);
//! assert!(!results.is_empty());
//!
//! // Add the first hit to a cart.
//! let mut cart = Cart::new();
//! let item = LineItem::with_defaults(&results[0], 1).unwrap();
//! cart.add(item).unwrap();
//! assert_eq!(cart.total(), results[0].price);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod search;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{CommerceError, SelectionKind};
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{demo_catalog, Catalog, Category, CategoryFilter, Product};

    // Cart
    pub use crate::cart::{Cart, LineItem, LineKey, MAX_QUANTITY_PER_LINE};

    // Search
    pub use crate::search::{CatalogQuery, PriceRange, SortKey};

    // Auth
    pub use crate::auth::{AuthError, AuthGateway, Role, Session, User};

    // Checkout
    pub use crate::checkout::{CheckoutProcessor, CustomerDetails, Order};
}
