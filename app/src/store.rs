//! The cart store: reactive cart state, persistence, hydration.
//!
//! This is the one component holding mutable application state. Every
//! page and navigation element reads derived values from it and mutates
//! it only through the four operations below; the cart sequence itself
//! is never handed out for direct mutation.
//!
//! # Persistence
//!
//! The cart is persisted as a JSON array of line items under a single
//! fixed key. Every mutation that actually changes state writes the
//! whole cart back, overwriting the prior value. Read or write failures
//! are logged and otherwise ignored: in-memory state stays
//! authoritative, and a missing or corrupt blob falls back to an empty
//! cart.
//!
//! Separate browser tabs each hold their own in-memory copy and
//! overwrite the same key independently; the last write wins.
//!
//! # Hydration
//!
//! The server-rendered pass has no access to client storage, so the
//! store exposes an empty cart until the client is interactive. The
//! persisted cart is applied from an effect that runs only in the
//! browser, after hydration, which keeps the pre-interactive output and
//! the first client render in agreement.

use leptos::prelude::*;
use rust_decimal::Decimal;
use shophub_commerce::{Cart, CartItem, Product, ProductId};
use shophub_storage::Store;

/// Storage key the serialized cart lives under.
pub const CART_KEY: &str = "cart";

/// Handle to the cart state. `Copy`, so components can capture it in as
/// many closures as they need.
///
/// Constructed once at the composition root with [`CartStore::provide`]
/// and obtained everywhere else via `expect_context::<CartStore>()`.
#[derive(Clone, Copy)]
pub struct CartStore {
    cart: RwSignal<Cart>,
    hydrated: RwSignal<bool>,
    storage: StoredValue<Store>,
}

impl CartStore {
    /// Create a store with an empty cart over the given storage.
    ///
    /// The persisted cart is not loaded here; that happens in the
    /// hydration effect set up by [`CartStore::provide`] (or manually
    /// via [`CartStore::hydrate`] in tests).
    pub fn new(storage: Store) -> Self {
        Self {
            cart: RwSignal::new(Cart::new()),
            hydrated: RwSignal::new(false),
            storage: StoredValue::new(storage),
        }
    }

    /// Create the store at the composition root, schedule hydration for
    /// when the client becomes interactive, and provide it as context.
    pub fn provide(storage: Store) -> Self {
        let store = Self::new(storage);
        Effect::new(move |_| store.hydrate());
        provide_context(store);
        store
    }

    /// Apply the persisted cart, once.
    ///
    /// Absence leaves the cart empty; a corrupt blob is logged and
    /// treated the same way. Either way the store is marked hydrated.
    pub fn hydrate(&self) {
        if self.hydrated.get_untracked() {
            return;
        }
        match self
            .storage
            .with_value(|s| s.get::<Vec<CartItem>>(CART_KEY))
        {
            Ok(Some(items)) => self.cart.set(Cart::from_items(items)),
            Ok(None) => {}
            Err(e) => tracing::warn!("discarding persisted cart: {e}"),
        }
        self.hydrated.set(true);
    }

    /// Whether the persisted cart has been applied.
    pub fn is_hydrated(&self) -> bool {
        self.hydrated.get()
    }

    fn persist(&self) {
        let result = self
            .cart
            .with_untracked(|cart| self.storage.with_value(|s| s.set(CART_KEY, cart)));
        if let Err(e) = result {
            tracing::warn!("failed to persist cart: {e}");
        }
    }

    /// Add a product to the cart: merge into an existing line or append
    /// a new one with quantity 1. Persists the updated cart.
    pub fn add_to_cart(&self, product: Product) {
        if self.cart.try_update(|c| c.add(product)).unwrap_or(false) {
            self.persist();
        }
    }

    /// Remove the line with the given id. A no-op without a persistence
    /// write when the id is absent.
    pub fn remove_from_cart(&self, id: ProductId) {
        if self.cart.try_update(|c| c.remove(id)).unwrap_or(false) {
            self.persist();
        }
    }

    /// Set a line's quantity to an absolute value; zero or less removes
    /// the line. Persists only on an actual change.
    pub fn update_quantity(&self, id: ProductId, quantity: i64) {
        if self
            .cart
            .try_update(|c| c.set_quantity(id, quantity))
            .unwrap_or(false)
        {
            self.persist();
        }
    }

    /// Empty the cart and persist the empty state.
    pub fn clear_cart(&self) {
        if self.cart.try_update(|c| c.clear()).unwrap_or(false) {
            self.persist();
        }
    }

    /// The line items, in insertion order. Reactive.
    pub fn items(&self) -> Vec<CartItem> {
        self.cart.with(|c| c.items().to_vec())
    }

    /// Whether the cart is empty. Reactive.
    pub fn is_empty(&self) -> bool {
        self.cart.with(Cart::is_empty)
    }

    /// Total unit count (sum of quantities). Reactive.
    pub fn cart_count(&self) -> u32 {
        self.cart.with(Cart::item_count)
    }

    /// Number of distinct lines. Reactive.
    pub fn unique_count(&self) -> usize {
        self.cart.with(Cart::unique_item_count)
    }

    /// Cart total at full precision. Reactive.
    pub fn cart_total(&self) -> Decimal {
        self.cart.with(Cart::total)
    }

    /// Cart total formatted for display. Reactive.
    pub fn cart_total_display(&self) -> String {
        self.cart.with(Cart::total_display)
    }
}
