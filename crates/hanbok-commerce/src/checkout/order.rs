//! Checkout: customer details, order placement, and the order record.

use crate::cart::{Cart, LineItem};
use crate::error::CommerceError;
use crate::ids::OrderId;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::info;

/// The checkout form fields.
///
/// Card details are deliberately not modeled: there is no payment
/// integration, and the simulated processor never reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CustomerDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

impl CustomerDetails {
    /// Check that every field was filled in.
    pub fn validate(&self) -> Result<(), CommerceError> {
        let fields = [
            ("first name", &self.first_name),
            ("last name", &self.last_name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("address", &self.address),
            ("city", &self.city),
            ("state", &self.state),
            ("zip code", &self.zip_code),
        ];
        for (label, value) in fields {
            if value.trim().is_empty() {
                return Err(CommerceError::MissingCheckoutField(label.to_string()));
            }
        }
        Ok(())
    }

    /// Full name for display on the order.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A placed order: a snapshot of the cart at the moment of checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Unique order identifier.
    pub id: OrderId,
    /// The purchased lines, as they stood in the cart.
    pub items: Vec<LineItem>,
    /// Order total (equals the cart total at placement).
    pub total: Money,
    /// Who the order ships to.
    pub customer: CustomerDetails,
    /// Unix timestamp of placement.
    pub placed_at: i64,
}

/// Simulated order processor.
///
/// Stands in for the payment/order backend: it validates, sleeps an
/// artificial processing delay, then returns the order and empties the cart,
/// exactly as the storefront behaves.
#[derive(Debug, Clone)]
pub struct CheckoutProcessor {
    latency: Duration,
}

impl CheckoutProcessor {
    /// Create a processor with the given simulated processing delay.
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    /// Place an order for the cart's contents.
    ///
    /// Fails without touching the cart if the cart is empty or the customer
    /// details are incomplete. On success the cart is cleared.
    pub async fn place_order(
        &self,
        cart: &mut Cart,
        customer: CustomerDetails,
    ) -> Result<Order, CommerceError> {
        if cart.is_empty() {
            return Err(CommerceError::EmptyCart);
        }
        customer.validate()?;

        tokio::time::sleep(self.latency).await;

        let order = Order {
            id: OrderId::generate(),
            items: cart.items().to_vec(),
            total: cart.total(),
            customer,
            placed_at: current_timestamp(),
        };
        cart.clear();

        info!(
            order_id = %order.id,
            total = %order.total,
            lines = order.items.len(),
            "order placed"
        );
        Ok(order)
    }
}

impl Default for CheckoutProcessor {
    /// The storefront's simulated 2 second payment processing.
    fn default() -> Self {
        Self::new(Duration::from_secs(2))
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use crate::ids::ProductId;
    use crate::money::Currency;

    fn details() -> CustomerDetails {
        CustomerDetails {
            first_name: "Mina".to_string(),
            last_name: "Park".to_string(),
            email: "mina@example.com".to_string(),
            phone: "555-0100".to_string(),
            address: "12 Bukchon-ro".to_string(),
            city: "Seoul".to_string(),
            state: "Seoul".to_string(),
            zip_code: "03044".to_string(),
        }
    }

    fn filled_cart() -> Cart {
        let mut cart = Cart::new();
        cart.add(LineItem {
            product_id: ProductId::new("1"),
            name: "Traditional Silk Jeogori".to_string(),
            unit_price: Money::new(18999, Currency::USD),
            image: "/images/1.jpg".to_string(),
            category: Category::Wedding,
            quantity: 2,
            size: "M".to_string(),
            color: "Ivory".to_string(),
        })
        .unwrap();
        cart
    }

    fn processor() -> CheckoutProcessor {
        CheckoutProcessor::new(Duration::ZERO)
    }

    #[tokio::test]
    async fn test_place_order_snapshots_and_clears_cart() {
        let mut cart = filled_cart();
        let expected_total = cart.total();

        let order = processor().place_order(&mut cart, details()).await.unwrap();

        assert_eq!(order.total, expected_total);
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].quantity, 2);
        assert!(cart.is_empty());
        assert!(cart.total().is_zero());
    }

    #[tokio::test]
    async fn test_empty_cart_is_rejected() {
        let mut cart = Cart::new();
        let result = processor().place_order(&mut cart, details()).await;
        assert!(matches!(result, Err(CommerceError::EmptyCart)));
    }

    #[tokio::test]
    async fn test_incomplete_details_leave_cart_untouched() {
        let mut cart = filled_cart();
        let mut bad = details();
        bad.email = "   ".to_string();

        let result = processor().place_order(&mut cart, bad).await;
        assert!(matches!(
            result,
            Err(CommerceError::MissingCheckoutField(ref f)) if f == "email"
        ));
        assert_eq!(cart.line_count(), 1);
    }

    #[test]
    fn test_full_name() {
        assert_eq!(details().full_name(), "Mina Park");
    }

    #[test]
    fn test_validate_accepts_complete_details() {
        assert!(details().validate().is_ok());
    }
}
