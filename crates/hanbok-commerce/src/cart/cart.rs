//! Cart and line item types.

use crate::catalog::{Category, Product};
use crate::error::{CommerceError, SelectionKind};
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Maximum quantity allowed per line item.
pub const MAX_QUANTITY_PER_LINE: i64 = 9999;

/// The identity of a cart line: two additions merge into one line exactly
/// when product, size, and color all match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineKey {
    /// Product identifier.
    pub product_id: ProductId,
    /// Selected size.
    pub size: String,
    /// Selected color.
    pub color: String,
}

/// One line in the cart: a product at a specific size, color, and quantity.
///
/// Product fields are denormalized onto the line so the cart can render and
/// total itself without consulting the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product identifier.
    pub product_id: ProductId,
    /// Product name (denormalized for display).
    pub name: String,
    /// Unit price at the time the line was created.
    pub unit_price: Money,
    /// Image asset reference.
    pub image: String,
    /// Product category.
    pub category: Category,
    /// Quantity (always >= 1 inside a cart).
    pub quantity: i64,
    /// Selected size.
    pub size: String,
    /// Selected color.
    pub color: String,
}

impl LineItem {
    /// Build a line item for a product, validating the selection.
    ///
    /// This is the boundary where quantity positivity and size/color
    /// membership are enforced; `Cart::add` assumes a well-formed line.
    pub fn for_product(
        product: &Product,
        quantity: i64,
        size: impl Into<String>,
        color: impl Into<String>,
    ) -> Result<Self, CommerceError> {
        if quantity <= 0 {
            return Err(CommerceError::InvalidQuantity(quantity));
        }
        if quantity > MAX_QUANTITY_PER_LINE {
            return Err(CommerceError::QuantityExceedsLimit(
                quantity,
                MAX_QUANTITY_PER_LINE,
            ));
        }
        let size = size.into();
        if !product.has_size(&size) {
            return Err(CommerceError::InvalidSelection {
                product_id: product.id.as_str().to_string(),
                kind: SelectionKind::Size,
                value: size,
            });
        }
        let color = color.into();
        if !product.has_color(&color) {
            return Err(CommerceError::InvalidSelection {
                product_id: product.id.as_str().to_string(),
                kind: SelectionKind::Color,
                value: color,
            });
        }
        Ok(Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            unit_price: product.price,
            image: product.image.clone(),
            category: product.category,
            quantity,
            size,
            color,
        })
    }

    /// Build a line item with the product's default size and color.
    pub fn with_defaults(product: &Product, quantity: i64) -> Result<Self, CommerceError> {
        Self::for_product(
            product,
            quantity,
            product.default_size(),
            product.default_color(),
        )
    }

    /// The merge key of this line.
    pub fn key(&self) -> LineKey {
        LineKey {
            product_id: self.product_id.clone(),
            size: self.size.clone(),
            color: self.color.clone(),
        }
    }

    fn matches_key(&self, key: &LineKey) -> bool {
        self.product_id == key.product_id && self.size == key.size && self.color == key.color
    }

    /// This line's contribution to the cart total.
    pub fn line_total(&self) -> Result<Money, CommerceError> {
        self.unit_price
            .try_multiply(self.quantity)
            .ok_or(CommerceError::Overflow)
    }
}

/// The shopping cart.
///
/// Lines are kept in insertion order, which is also display order. The total
/// is recomputed in full from the lines after every mutation; it is never
/// adjusted incrementally and cannot be set from outside.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cart {
    items: Vec<LineItem>,
    total: Money,
}

impl Cart {
    /// Create an empty cart pricing in USD.
    pub fn new() -> Self {
        Self::with_currency(Currency::USD)
    }

    /// Create an empty cart pricing in the given currency.
    pub fn with_currency(currency: Currency) -> Self {
        Self {
            items: Vec::new(),
            total: Money::zero(currency),
        }
    }

    /// Add a line item to the cart.
    ///
    /// If a line with the same (product, size, color) key exists, its quantity
    /// grows by the added amount and every other field of the existing line is
    /// retained. Otherwise the item is appended, preserving insertion order.
    pub fn add(&mut self, item: LineItem) -> Result<(), CommerceError> {
        if item.quantity <= 0 {
            return Err(CommerceError::InvalidQuantity(item.quantity));
        }
        if item.unit_price.currency != self.currency() {
            return Err(CommerceError::CurrencyMismatch {
                expected: self.currency().code().to_string(),
                got: item.unit_price.currency.code().to_string(),
            });
        }

        let key = item.key();
        if let Some(existing) = self.items.iter_mut().find(|i| i.matches_key(&key)) {
            let new_quantity = existing
                .quantity
                .checked_add(item.quantity)
                .ok_or(CommerceError::Overflow)?;
            if new_quantity > MAX_QUANTITY_PER_LINE {
                return Err(CommerceError::QuantityExceedsLimit(
                    new_quantity,
                    MAX_QUANTITY_PER_LINE,
                ));
            }
            existing.quantity = new_quantity;
            debug!(product_id = %key.product_id, quantity = new_quantity, "merged cart line");
        } else {
            if item.quantity > MAX_QUANTITY_PER_LINE {
                return Err(CommerceError::QuantityExceedsLimit(
                    item.quantity,
                    MAX_QUANTITY_PER_LINE,
                ));
            }
            debug!(product_id = %key.product_id, quantity = item.quantity, "appended cart line");
            self.items.push(item);
        }
        self.recompute_total()
    }

    /// Remove every line carrying the given product, regardless of size or
    /// color. Returns whether anything was removed; an unknown id is a no-op.
    ///
    /// This matches by product id alone, coarser than the merge key `add`
    /// uses. To remove a single size/color variant, use [`Cart::remove_line`].
    pub fn remove_product(&mut self, product_id: &ProductId) -> bool {
        let before = self.items.len();
        self.items.retain(|i| &i.product_id != product_id);
        let removed = self.items.len() < before;
        if removed {
            debug!(product_id = %product_id, lines = before - self.items.len(), "removed product from cart");
            self.recompute_total_after_shrink();
        }
        removed
    }

    /// Set the quantity of every line carrying the given product, then drop
    /// lines whose quantity is now <= 0 (the documented way to remove).
    ///
    /// Returns the number of lines touched; an unknown id is a no-op. Matches
    /// by product id alone; see [`Cart::set_line_quantity`] for the
    /// per-variant form.
    pub fn set_product_quantity(
        &mut self,
        product_id: &ProductId,
        quantity: i64,
    ) -> Result<usize, CommerceError> {
        if quantity > MAX_QUANTITY_PER_LINE {
            return Err(CommerceError::QuantityExceedsLimit(
                quantity,
                MAX_QUANTITY_PER_LINE,
            ));
        }

        let mut touched = 0;
        for item in self.items.iter_mut().filter(|i| &i.product_id == product_id) {
            item.quantity = quantity;
            touched += 1;
        }
        if touched > 0 {
            self.items.retain(|i| i.quantity > 0);
            debug!(product_id = %product_id, quantity, touched, "set product quantity");
            self.recompute_total()?;
        }
        Ok(touched)
    }

    /// Remove the single line identified by the full merge key.
    ///
    /// Returns whether a line was removed; an unknown key is a no-op.
    pub fn remove_line(&mut self, key: &LineKey) -> bool {
        let before = self.items.len();
        self.items.retain(|i| !i.matches_key(key));
        let removed = self.items.len() < before;
        if removed {
            debug!(product_id = %key.product_id, size = %key.size, color = %key.color, "removed cart line");
            self.recompute_total_after_shrink();
        }
        removed
    }

    /// Set the quantity of the single line identified by the full merge key.
    ///
    /// A quantity <= 0 removes the line. Returns whether a line was touched;
    /// an unknown key is a no-op.
    pub fn set_line_quantity(
        &mut self,
        key: &LineKey,
        quantity: i64,
    ) -> Result<bool, CommerceError> {
        if quantity <= 0 {
            return Ok(self.remove_line(key));
        }
        if quantity > MAX_QUANTITY_PER_LINE {
            return Err(CommerceError::QuantityExceedsLimit(
                quantity,
                MAX_QUANTITY_PER_LINE,
            ));
        }
        if let Some(item) = self.items.iter_mut().find(|i| i.matches_key(key)) {
            item.quantity = quantity;
            debug!(product_id = %key.product_id, size = %key.size, color = %key.color, quantity, "set line quantity");
            self.recompute_total()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Empty the cart. Unconditional.
    pub fn clear(&mut self) {
        self.items.clear();
        self.total = Money::zero(self.currency());
        debug!("cleared cart");
    }

    /// Rebuild a cart by replaying `add` over stored line items.
    ///
    /// This is the rehydration path for persisted carts: lines re-merge and
    /// the total is recomputed, so a stale or tampered stored total can never
    /// survive a reload.
    pub fn rehydrate(items: Vec<LineItem>) -> Result<Self, CommerceError> {
        let currency = items
            .first()
            .map(|i| i.unit_price.currency)
            .unwrap_or_default();
        let mut cart = Cart::with_currency(currency);
        for item in items {
            cart.add(item)?;
        }
        Ok(cart)
    }

    /// The lines in display (insertion) order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// The cart total: sum of unit price x quantity over all lines.
    pub fn total(&self) -> Money {
        self.total
    }

    /// The cart currency.
    pub fn currency(&self) -> Currency {
        self.total.currency
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the line with the given merge key, if present.
    pub fn get_line(&self, key: &LineKey) -> Option<&LineItem> {
        self.items.iter().find(|i| i.matches_key(key))
    }

    fn recompute_total(&mut self) -> Result<(), CommerceError> {
        let currency = self.currency();
        let mut acc = Money::zero(currency);
        for item in &self.items {
            let line = item.line_total()?;
            acc = acc.try_add(&line).ok_or(CommerceError::Overflow)?;
        }
        self.total = acc;
        Ok(())
    }

    // After a pure removal the remaining lines summed without overflow as part
    // of the previous total, so recomputation cannot fail.
    fn recompute_total_after_shrink(&mut self) {
        let currency = self.currency();
        let cents: i64 = self
            .items
            .iter()
            .map(|i| i.unit_price.amount_cents.saturating_mul(i.quantity))
            .fold(0i64, i64::saturating_add);
        self.total = Money::new(cents, currency);
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

// Deserialization replays `add` over the stored lines rather than trusting
// the stored total, preserving the recomputed-total invariant.
impl<'de> Deserialize<'de> for Cart {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Snapshot {
            items: Vec<LineItem>,
        }

        let snapshot = Snapshot::deserialize(deserializer)?;
        Cart::rehydrate(snapshot.items).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;

    fn product(id: &str, price_cents: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            price: Money::new(price_cents, Currency::USD),
            image: format!("/images/{id}.jpg"),
            category: Category::Casual,
            description: "test".to_string(),
            sizes: vec!["S".to_string(), "M".to_string()],
            colors: vec!["Red".to_string(), "Blue".to_string()],
        }
    }

    fn line(id: &str, price_cents: i64, quantity: i64, size: &str, color: &str) -> LineItem {
        LineItem::for_product(&product(id, price_cents), quantity, size, color).unwrap()
    }

    #[test]
    fn test_new_cart_is_empty() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert!(cart.total().is_zero());
    }

    #[test]
    fn test_add_distinct_keys_appends_in_order() {
        let mut cart = Cart::new();
        cart.add(line("1", 1000, 1, "M", "Red")).unwrap();
        cart.add(line("2", 3000, 1, "M", "Red")).unwrap();
        cart.add(line("1", 1000, 1, "M", "Blue")).unwrap();

        assert_eq!(cart.line_count(), 3);
        let ids: Vec<&str> = cart.items().iter().map(|i| i.product_id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "1"]);
        assert_eq!(cart.total().amount_cents, 5000);
    }

    #[test]
    fn test_add_same_key_merges_quantity() {
        // $10 x2 then $10 x1 on the same key -> one line, qty 3, total $30.
        let mut cart = Cart::new();
        cart.add(line("1", 1000, 2, "M", "Red")).unwrap();
        cart.add(line("1", 1000, 1, "M", "Red")).unwrap();

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.items()[0].quantity, 3);
        assert_eq!(cart.total().amount_cents, 3000);

        cart.add(line("2", 3000, 1, "M", "Red")).unwrap();
        assert_eq!(cart.total().amount_cents, 6000);
    }

    #[test]
    fn test_same_product_different_variant_is_distinct() {
        let mut cart = Cart::new();
        cart.add(line("1", 1000, 1, "M", "Red")).unwrap();
        cart.add(line("1", 1000, 1, "S", "Red")).unwrap();
        cart.add(line("1", 1000, 1, "M", "Blue")).unwrap();
        assert_eq!(cart.line_count(), 3);
    }

    #[test]
    fn test_merge_retains_existing_fields() {
        let mut cart = Cart::new();
        let mut first = line("1", 1000, 1, "M", "Red");
        first.name = "Original Name".to_string();
        cart.add(first).unwrap();

        let mut second = line("1", 1000, 2, "M", "Red");
        second.name = "Renamed Later".to_string();
        cart.add(second).unwrap();

        assert_eq!(cart.items()[0].name, "Original Name");
        assert_eq!(cart.items()[0].quantity, 3);
    }

    #[test]
    fn test_add_rejects_non_positive_quantity() {
        let mut cart = Cart::new();
        let mut item = line("1", 1000, 1, "M", "Red");
        item.quantity = 0;
        assert!(matches!(
            cart.add(item),
            Err(CommerceError::InvalidQuantity(0))
        ));
    }

    #[test]
    fn test_add_rejects_quantity_above_cap() {
        let mut cart = Cart::new();
        cart.add(line("1", 1000, MAX_QUANTITY_PER_LINE, "M", "Red"))
            .unwrap();
        let result = cart.add(line("1", 1000, 1, "M", "Red"));
        assert!(matches!(
            result,
            Err(CommerceError::QuantityExceedsLimit(_, _))
        ));
    }

    #[test]
    fn test_add_rejects_currency_mismatch() {
        let mut cart = Cart::with_currency(Currency::EUR);
        let result = cart.add(line("1", 1000, 1, "M", "Red"));
        assert!(matches!(
            result,
            Err(CommerceError::CurrencyMismatch { .. })
        ));
    }

    #[test]
    fn test_overflow_is_an_error_not_a_wrap() {
        let mut cart = Cart::new();
        cart.add(line("1", i64::MAX / 2, 2, "M", "Red")).unwrap();
        let result = cart.add(line("2", i64::MAX / 2, 2, "M", "Red"));
        assert!(matches!(result, Err(CommerceError::Overflow)));
    }

    #[test]
    fn test_remove_product_drops_all_variants() {
        let mut cart = Cart::new();
        cart.add(line("1", 1000, 2, "M", "Red")).unwrap();
        cart.add(line("1", 1000, 1, "S", "Blue")).unwrap();
        cart.add(line("2", 3000, 1, "M", "Red")).unwrap();

        assert!(cart.remove_product(&ProductId::new("1")));
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.items()[0].product_id.as_str(), "2");
        assert_eq!(cart.total().amount_cents, 3000);
    }

    #[test]
    fn test_remove_unknown_product_is_noop() {
        let mut cart = Cart::new();
        cart.add(line("1", 1000, 3, "M", "Red")).unwrap();
        assert!(!cart.remove_product(&ProductId::new("missing")));
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.total().amount_cents, 3000);
    }

    #[test]
    fn test_set_product_quantity() {
        let mut cart = Cart::new();
        cart.add(line("1", 1000, 1, "M", "Red")).unwrap();
        let touched = cart
            .set_product_quantity(&ProductId::new("1"), 5)
            .unwrap();
        assert_eq!(touched, 1);
        assert_eq!(cart.item_count(), 5);
        assert_eq!(cart.total().amount_cents, 5000);
    }

    #[test]
    fn test_set_product_quantity_zero_removes() {
        let mut cart = Cart::new();
        cart.add(line("1", 1000, 2, "M", "Red")).unwrap();
        cart.add(line("1", 1000, 1, "S", "Blue")).unwrap();
        cart.add(line("2", 3000, 1, "M", "Red")).unwrap();

        cart.set_product_quantity(&ProductId::new("1"), 0).unwrap();
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.total().amount_cents, 3000);

        cart.set_product_quantity(&ProductId::new("2"), -3).unwrap();
        assert!(cart.is_empty());
        assert!(cart.total().is_zero());
    }

    #[test]
    fn test_set_quantity_unknown_product_is_noop() {
        let mut cart = Cart::new();
        cart.add(line("1", 1000, 1, "M", "Red")).unwrap();
        let touched = cart
            .set_product_quantity(&ProductId::new("missing"), 4)
            .unwrap();
        assert_eq!(touched, 0);
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_line_level_ops_disambiguate_variants() {
        let mut cart = Cart::new();
        cart.add(line("1", 1000, 2, "M", "Red")).unwrap();
        cart.add(line("1", 1000, 1, "S", "Blue")).unwrap();

        let key = LineKey {
            product_id: ProductId::new("1"),
            size: "M".to_string(),
            color: "Red".to_string(),
        };
        assert!(cart.set_line_quantity(&key, 4).unwrap());
        assert_eq!(cart.get_line(&key).unwrap().quantity, 4);
        assert_eq!(cart.total().amount_cents, 5000);

        assert!(cart.remove_line(&key));
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.items()[0].size, "S");
        assert_eq!(cart.total().amount_cents, 1000);
    }

    #[test]
    fn test_set_line_quantity_zero_removes() {
        let mut cart = Cart::new();
        cart.add(line("1", 1000, 2, "M", "Red")).unwrap();
        let key = cart.items()[0].key();
        assert!(cart.set_line_quantity(&key, 0).unwrap());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add(line("1", 1000, 2, "M", "Red")).unwrap();
        cart.add(line("2", 3000, 1, "M", "Red")).unwrap();
        cart.clear();
        assert!(cart.is_empty());
        assert!(cart.total().is_zero());
    }

    #[test]
    fn test_for_product_validates_selection() {
        let p = product("1", 1000);
        assert!(LineItem::for_product(&p, 1, "M", "Red").is_ok());
        assert!(matches!(
            LineItem::for_product(&p, 1, "XXL", "Red"),
            Err(CommerceError::InvalidSelection {
                kind: SelectionKind::Size,
                ..
            })
        ));
        assert!(matches!(
            LineItem::for_product(&p, 1, "M", "Chartreuse"),
            Err(CommerceError::InvalidSelection {
                kind: SelectionKind::Color,
                ..
            })
        ));
        assert!(matches!(
            LineItem::for_product(&p, 0, "M", "Red"),
            Err(CommerceError::InvalidQuantity(0))
        ));
    }

    #[test]
    fn test_json_round_trip_replays_adds() {
        let mut cart = Cart::new();
        cart.add(line("1", 1000, 2, "M", "Red")).unwrap();
        cart.add(line("2", 3000, 1, "S", "Blue")).unwrap();

        let json = serde_json::to_string(&cart).unwrap();
        let restored: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, cart);
    }

    #[test]
    fn test_deserialize_ignores_stored_total() {
        // A tampered total cannot survive rehydration.
        let json = r#"{
            "items": [{
                "product_id": "1",
                "name": "Product 1",
                "unit_price": { "amount_cents": 1000, "currency": "USD" },
                "image": "/images/1.jpg",
                "category": "Casual",
                "quantity": 2,
                "size": "M",
                "color": "Red"
            }],
            "total": { "amount_cents": 1, "currency": "USD" }
        }"#;
        let cart: Cart = serde_json::from_str(json).unwrap();
        assert_eq!(cart.total().amount_cents, 2000);
    }

    #[test]
    fn test_rehydrate_merges_duplicate_keys() {
        let items = vec![
            line("1", 1000, 1, "M", "Red"),
            line("1", 1000, 2, "M", "Red"),
        ];
        let cart = Cart::rehydrate(items).unwrap();
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.total().amount_cents, 3000);
    }
}
