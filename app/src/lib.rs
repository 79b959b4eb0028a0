//! ShopHub storefront application.
//!
//! A Leptos storefront over the external product catalog with:
//! - A client-local, persisted shopping cart (the [`store`] module)
//! - Dashboard, product listing, product detail and cart pages
//! - Server rendering behind the `ssr` feature, client hydration behind
//!   `hydrate`

pub mod app;
pub mod components;
pub mod pages;
pub mod store;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use app::App;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
