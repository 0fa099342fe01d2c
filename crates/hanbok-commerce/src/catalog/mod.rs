//! Product catalog module.
//!
//! Read-only reference data: products, categories, and the seeded demo list.

mod category;
mod data;
mod product;

pub use category::{Category, CategoryFilter};
pub use data::demo_catalog;
pub use product::{Catalog, Product};
