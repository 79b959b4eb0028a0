//! Cart and line item types.

use crate::product::{Product, ProductId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A line item in the cart: a product plus a purchase quantity.
///
/// The quantity is always at least one. A zero-quantity line is a
/// transient value that never reaches the cart or storage; dropping a
/// line's quantity to zero removes the line instead.
///
/// Serializes as the full product fields plus `quantity` in one flat
/// object, which is the persisted wire layout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// The product being purchased.
    #[serde(flatten)]
    pub product: Product,
    /// Purchase quantity, >= 1.
    pub quantity: u32,
}

impl CartItem {
    /// Line subtotal (unit price times quantity), full precision.
    pub fn subtotal(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }

    /// Format the line subtotal for display (e.g., "$21.98").
    pub fn subtotal_display(&self) -> String {
        format!("${:.2}", self.subtotal())
    }
}

/// An ordered shopping cart, keyed by product id.
///
/// Mutations go through the four operations below; each returns whether
/// the cart actually changed, which is what drives persist-on-change.
/// The item sequence is not otherwise reachable for mutation.
///
/// Serializes transparently as the array of line items.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a cart from previously persisted line items.
    ///
    /// Persisted state is untrusted: zero-quantity lines are dropped and
    /// later duplicates of an id already seen are discarded, so every
    /// reachable cart upholds the quantity and uniqueness invariants.
    pub fn from_items(items: Vec<CartItem>) -> Self {
        let mut cart = Self::new();
        for item in items {
            if item.quantity == 0 {
                continue;
            }
            if cart.get(item.product.id).is_none() {
                cart.items.push(item);
            }
        }
        cart
    }

    /// Add a product to the cart.
    ///
    /// If a line with the same id exists its quantity is incremented by
    /// exactly one; repeated adds accumulate and never create a duplicate
    /// row. Otherwise a new line with quantity one is appended at the end,
    /// preserving the insertion order of existing lines.
    pub fn add(&mut self, product: Product) -> bool {
        if let Some(existing) = self.items.iter_mut().find(|i| i.product.id == product.id) {
            existing.quantity = existing.quantity.saturating_add(1);
        } else {
            self.items.push(CartItem {
                product,
                quantity: 1,
            });
        }
        true
    }

    /// Set a line's quantity to an absolute value.
    ///
    /// A quantity of zero or less removes the line entirely; a quantity
    /// is never stored as zero. An unknown id is a no-op. Returns whether
    /// the cart changed.
    pub fn set_quantity(&mut self, id: ProductId, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove(id);
        }

        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        match self.items.iter_mut().find(|i| i.product.id == id) {
            Some(item) if item.quantity != quantity => {
                item.quantity = quantity;
                true
            }
            _ => false,
        }
    }

    /// Remove the line with the given id, if present.
    ///
    /// Idempotent: an absent id is a no-op. Returns whether a line was
    /// removed.
    pub fn remove(&mut self, id: ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| i.product.id != id);
        self.items.len() < len_before
    }

    /// Empty the cart. Returns whether it held any lines.
    pub fn clear(&mut self) -> bool {
        let was_empty = self.items.is_empty();
        self.items.clear();
        !was_empty
    }

    /// Get a line by product id.
    pub fn get(&self, id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|i| i.product.id == id)
    }

    /// The line items, in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Total unit count (sum of quantities).
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Number of distinct lines.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Cart total (sum of line subtotals), full precision. Recomputed
    /// from current contents on every call.
    pub fn total(&self) -> Decimal {
        self.items.iter().map(CartItem::subtotal).sum()
    }

    /// Format the cart total for display (e.g., "$114.85").
    pub fn total_display(&self) -> String {
        format!("${:.2}", self.total())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::Rating;
    use std::str::FromStr;

    fn product(id: u32, price: &str) -> Product {
        Product {
            id: ProductId::new(id),
            title: format!("Product {id}"),
            price: Decimal::from_str(price).unwrap(),
            description: "A test product".to_string(),
            category: "electronics".to_string(),
            image: format!("https://example.com/{id}.jpg"),
            rating: Rating {
                rate: Decimal::from_str("4.5").unwrap(),
                count: 10,
            },
        }
    }

    fn assert_invariants(cart: &Cart) {
        let mut seen = Vec::new();
        for item in cart.items() {
            assert!(item.quantity >= 1, "zero-quantity line in cart");
            assert!(!seen.contains(&item.product.id), "duplicate id in cart");
            seen.push(item.product.id);
        }
        let expected: Decimal = cart
            .items()
            .iter()
            .map(|i| i.product.price * Decimal::from(i.quantity))
            .sum();
        assert_eq!(cart.total(), expected);
        let expected_count: u32 = cart.items().iter().map(|i| i.quantity).sum();
        assert_eq!(cart.item_count(), expected_count);
    }

    #[test]
    fn test_empty_cart() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.total(), Decimal::ZERO);
        assert_eq!(cart.total_display(), "$0.00");
    }

    #[test]
    fn test_add_same_product_merges() {
        // Scenario: adding the same product twice yields one line with
        // quantity 2, total 20.00, count 2.
        let mut cart = Cart::new();
        cart.add(product(1, "10"));
        cart.add(product(1, "10"));

        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.total(), Decimal::from(20));
        assert_eq!(cart.total_display(), "$20.00");
        assert_invariants(&cart);
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut cart = Cart::new();
        cart.add(product(3, "1.00"));
        cart.add(product(1, "2.00"));
        cart.add(product(2, "3.00"));
        cart.add(product(1, "2.00"));

        let ids: Vec<u32> = cart.items().iter().map(|i| i.product.id.get()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_invariants(&cart);
    }

    #[test]
    fn test_set_quantity_to_zero_removes_line() {
        // Scenario: [{id:1, $10, qty 1}, {id:2, $5, qty 1}], set id 1 to 0
        // => only id 2 remains, total 5.00, count 1.
        let mut cart = Cart::new();
        cart.add(product(1, "10"));
        cart.add(product(2, "5"));

        assert!(cart.set_quantity(ProductId::new(1), 0));

        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.get(ProductId::new(1)), None);
        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.total(), Decimal::from(5));
        assert_invariants(&cart);
    }

    #[test]
    fn test_decrement_to_zero_removes_line() {
        // The UI decrease control passes quantity - 1; reaching zero must
        // remove the line, never store it.
        let mut cart = Cart::new();
        cart.add(product(1, "10"));
        let current = cart.get(ProductId::new(1)).unwrap().quantity;

        assert!(cart.set_quantity(ProductId::new(1), i64::from(current) - 1));
        assert!(cart.is_empty());
        assert_invariants(&cart);
    }

    #[test]
    fn test_set_quantity_absolute() {
        let mut cart = Cart::new();
        cart.add(product(1, "10"));
        cart.add(product(1, "10"));

        assert!(cart.set_quantity(ProductId::new(1), 5));
        assert_eq!(cart.get(ProductId::new(1)).unwrap().quantity, 5);
        assert_eq!(cart.item_count(), 5);
        assert_invariants(&cart);
    }

    #[test]
    fn test_set_quantity_unknown_id_is_noop() {
        // Scenario: set_quantity(99, 3) on an empty cart leaves it empty.
        let mut cart = Cart::new();
        assert!(!cart.set_quantity(ProductId::new(99), 3));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_same_value_is_not_a_change() {
        let mut cart = Cart::new();
        cart.add(product(1, "10"));
        assert!(!cart.set_quantity(ProductId::new(1), 1));
    }

    #[test]
    fn test_set_quantity_negative_removes() {
        let mut cart = Cart::new();
        cart.add(product(1, "10"));
        assert!(cart.set_quantity(ProductId::new(1), -3));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut cart = Cart::new();
        cart.add(product(1, "10"));

        assert!(cart.remove(ProductId::new(1)));
        assert!(!cart.remove(ProductId::new(1)));
        assert!(!cart.remove(ProductId::new(1)));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_clear() {
        // Scenario: three distinct items, then clear => empty, zero totals.
        let mut cart = Cart::new();
        cart.add(product(1, "10"));
        cart.add(product(2, "5"));
        cart.add(product(3, "2.50"));

        assert!(cart.clear());
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.total_display(), "$0.00");
        assert!(!cart.clear());
    }

    #[test]
    fn test_total_tracks_mutations() {
        let mut cart = Cart::new();
        cart.add(product(1, "109.95"));
        cart.add(product(2, "22.30"));
        cart.add(product(1, "109.95"));
        assert_eq!(cart.total(), Decimal::from_str("242.20").unwrap());

        cart.set_quantity(ProductId::new(1), 1);
        assert_eq!(cart.total(), Decimal::from_str("132.25").unwrap());

        cart.remove(ProductId::new(2));
        assert_eq!(cart.total(), Decimal::from_str("109.95").unwrap());
        assert_invariants(&cart);
    }

    #[test]
    fn test_serialization_round_trip() {
        let mut cart = Cart::new();
        cart.add(product(2, "5.99"));
        cart.add(product(1, "10"));
        cart.add(product(2, "5.99"));

        let json = serde_json::to_string(&cart).unwrap();
        let restored: Cart = serde_json::from_str(&json).unwrap();

        let pairs = |c: &Cart| -> Vec<(u32, u32)> {
            c.items()
                .iter()
                .map(|i| (i.product.id.get(), i.quantity))
                .collect()
        };
        assert_eq!(pairs(&restored), pairs(&cart));
        assert_eq!(pairs(&restored), vec![(2, 2), (1, 1)]);
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let mut cart = Cart::new();
        cart.add(product(1, "10"));

        let json = serde_json::to_value(&cart).unwrap();
        let lines = json.as_array().expect("cart serializes as an array");
        assert_eq!(lines.len(), 1);
        // Flattened layout: product fields and quantity side by side.
        assert_eq!(lines[0]["id"], 1);
        assert_eq!(lines[0]["title"], "Product 1");
        assert_eq!(lines[0]["quantity"], 1);

        let empty = Cart::new();
        assert_eq!(serde_json::to_string(&empty).unwrap(), "[]");
    }

    #[test]
    fn test_from_items_drops_invalid_lines() {
        let good = CartItem {
            product: product(1, "10"),
            quantity: 2,
        };
        let zero = CartItem {
            product: product(2, "5"),
            quantity: 0,
        };
        let duplicate = CartItem {
            product: product(1, "10"),
            quantity: 7,
        };

        let cart = Cart::from_items(vec![good.clone(), zero, duplicate]);
        assert_eq!(cart.items(), &[good]);
        assert_invariants(&cart);
    }
}
