//! Checkout module.
//!
//! Single-step checkout: validate the form, simulate payment processing,
//! snapshot the cart into an order, clear the cart.

mod order;

pub use order::{CheckoutProcessor, CustomerDetails, Order};
