//! Shopping cart module.
//!
//! The cart owns an insertion-ordered list of line items and a derived total,
//! mutated only through a small closed set of operations.

mod cart;

pub use cart::{Cart, LineItem, LineKey, MAX_QUANTITY_PER_LINE};
