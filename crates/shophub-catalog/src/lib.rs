//! Read-only HTTP client for the ShopHub product catalog service.
//!
//! # Architecture
//!
//! - The catalog service is the source of truth for products; nothing is
//!   written back and nothing is cached locally
//! - Responses deserialize straight into `shophub_commerce` types, so
//!   the rest of the application never sees wire-format details
//! - The client never touches cart state; pages fetch products here and
//!   hand them to the cart store
//!
//! # Example
//!
//! ```rust,ignore
//! use shophub_catalog::CatalogClient;
//!
//! let catalog = CatalogClient::from_env();
//!
//! let products = catalog.products().await?;
//! let categories = catalog.categories().await?;
//! if let Some(product) = catalog.product(ProductId::new(1)).await? {
//!     println!("{}: {}", product.title, product.price_display());
//! }
//! ```

mod client;
mod error;

pub use client::{CatalogClient, DEFAULT_BASE_URL};
pub use error::CatalogError;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{CatalogClient, CatalogError};
}
