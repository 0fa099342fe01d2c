//! Catalog query module.
//!
//! Filtering and sorting over the in-memory product list. The query object
//! composes a category filter, free-text search, and price range by
//! conjunction, with the sort applied last.

mod filter;
mod query;

pub use filter::PriceRange;
pub use query::{CatalogQuery, SortKey};
