//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront commerce operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Product definition is invalid (e.g., no sizes or colors).
    #[error("Invalid product {id}: {reason}")]
    InvalidProduct { id: String, reason: String },

    /// Requested size or color is not offered by the product.
    #[error("Product {product_id} does not offer {kind} \"{value}\"")]
    InvalidSelection {
        product_id: String,
        kind: SelectionKind,
        value: String,
    },

    /// Invalid quantity.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Quantity exceeds maximum allowed per line.
    #[error("Quantity {0} exceeds maximum allowed ({1})")]
    QuantityExceedsLimit(i64, i64),

    /// Arithmetic overflow in a money calculation.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Checkout attempted on an empty cart.
    #[error("Cannot check out an empty cart")]
    EmptyCart,

    /// A required checkout form field is missing or blank.
    #[error("Checkout incomplete: missing {0}")]
    MissingCheckoutField(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Which product option a rejected selection refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionKind {
    Size,
    Color,
}

impl std::fmt::Display for SelectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SelectionKind::Size => write!(f, "size"),
            SelectionKind::Color => write!(f, "color"),
        }
    }
}
