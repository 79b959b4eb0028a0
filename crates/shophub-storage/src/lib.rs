//! Client-local key-value persistence layer for ShopHub.
//!
//! Provides a small, pluggable API for persisting data across page
//! reloads with automatic JSON serialization. The backend is a
//! string-valued key-value store behind the [`KeyValueStore`] trait:
//! browser `localStorage` in production, an in-memory map in tests and
//! on non-wasm targets.
//!
//! # Example
//!
//! ```rust,ignore
//! use shophub_storage::Store;
//!
//! let store = Store::local();
//!
//! // Store a value
//! store.set("cart", &items)?;
//!
//! // Retrieve a value
//! let items: Option<Vec<CartItem>> = store.get("cart")?;
//!
//! // Delete a value
//! store.remove("cart");
//! ```

mod error;
mod kv;

pub use error::StorageError;
pub use kv::{KeyValueStore, LocalStorage, MemoryStore, Store};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{KeyValueStore, LocalStorage, MemoryStore, StorageError, Store};
}
