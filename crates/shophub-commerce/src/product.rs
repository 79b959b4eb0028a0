//! Product types.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A unique product identifier.
///
/// Using a newtype prevents accidentally passing an arbitrary integer
/// (a quantity, an index) where a product id is expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(u32);

impl ProductId {
    /// Create a new ID from an integer.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the inner integer value.
    pub fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// Customer rating for a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Rating {
    /// Average rating, 0 to 5.
    pub rate: Decimal,
    /// Number of ratings.
    pub count: u32,
}

/// A product in the catalog.
///
/// Sourced from the external catalog service and never mutated locally.
/// Field names match the service's wire format exactly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product title.
    pub title: String,
    /// Unit price. Full precision is retained; rounding happens only at
    /// the display boundary.
    pub price: Decimal,
    /// Full description.
    pub description: String,
    /// Category name.
    pub category: String,
    /// URL of the product image.
    pub image: String,
    /// Customer rating.
    pub rating: Rating,
}

impl Product {
    /// Format the unit price for display (e.g., "$49.99").
    pub fn price_display(&self) -> String {
        format!("${:.2}", self.price)
    }

    /// Number of filled stars for a five-star rating row.
    pub fn rating_stars(&self) -> u32 {
        self.rating.rate.floor().to_u32().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn product_json() -> &'static str {
        r#"{
            "id": 1,
            "title": "Fjallraven - Foldsack No. 1 Backpack",
            "price": 109.95,
            "description": "Your perfect pack for everyday use",
            "category": "men's clothing",
            "image": "https://fakestoreapi.com/img/81fPKd-2AYL.jpg",
            "rating": { "rate": 3.9, "count": 120 }
        }"#
    }

    #[test]
    fn test_product_wire_format() {
        let product: Product = serde_json::from_str(product_json()).unwrap();
        assert_eq!(product.id, ProductId::new(1));
        assert_eq!(product.price, Decimal::from_str("109.95").unwrap());
        assert_eq!(product.category, "men's clothing");
        assert_eq!(product.rating.count, 120);
    }

    #[test]
    fn test_price_display_rounds_to_two_decimals() {
        let mut product: Product = serde_json::from_str(product_json()).unwrap();
        product.price = Decimal::from_str("7.5").unwrap();
        assert_eq!(product.price_display(), "$7.50");
    }

    #[test]
    fn test_rating_stars_floors() {
        let product: Product = serde_json::from_str(product_json()).unwrap();
        assert_eq!(product.rating_stars(), 3);
    }

    #[test]
    fn test_id_display() {
        let id = ProductId::new(42);
        assert_eq!(format!("{}", id), "42");
    }
}
