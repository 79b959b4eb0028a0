//! Cart and catalog domain types for ShopHub.
//!
//! This crate provides the types every other part of the storefront builds
//! on:
//!
//! - **Catalog**: `Product` and `Rating`, matching the external catalog
//!   service's wire format field for field
//! - **Cart**: `Cart` and `CartItem` with the four mutation operations
//!   (add, set quantity, remove, clear) and the derived unit count and
//!   total
//!
//! The cart enforces its own invariants: line quantities are always at
//! least one, product ids are unique within the cart, and totals are
//! recomputed from current contents on every read.
//!
//! # Example
//!
//! ```rust,ignore
//! use shophub_commerce::prelude::*;
//!
//! let mut cart = Cart::new();
//! cart.add(product.clone());
//! cart.add(product); // same id: merged, quantity 2
//!
//! assert_eq!(cart.item_count(), 2);
//! println!("Total: {}", cart.total_display());
//! ```

pub mod cart;
pub mod product;

pub use cart::{Cart, CartItem};
pub use product::{Product, ProductId, Rating};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::cart::{Cart, CartItem};
    pub use crate::product::{Product, ProductId, Rating};
}
