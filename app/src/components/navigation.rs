//! Top navigation bar.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::ThemeToggle;
use crate::store::CartStore;

/// Sticky navigation chrome: brand, section links, cart button with a
/// unit-count badge, theme toggle. Rendered on every page.
#[component]
pub fn Navigation() -> impl IntoView {
    let cart = expect_context::<CartStore>();
    let location = use_location();

    let link_class = move |href: &'static str| {
        if location.pathname.get() == href {
            "nav-link active"
        } else {
            "nav-link"
        }
    };

    view! {
        <nav class="nav">
            <div class="nav-inner">
                <div class="nav-left">
                    <a href="/dashboard" class="brand">"ShopHub"</a>
                    <div class="nav-links">
                        <a href="/dashboard" class=move || link_class("/dashboard")>"Dashboard"</a>
                        <a href="/products" class=move || link_class("/products")>"Products"</a>
                    </div>
                </div>
                <div class="nav-actions">
                    <a href="/cart" class="cart-button" aria-label="Shopping cart">
                        "\u{1f6d2}"
                        {move || {
                            (cart.cart_count() > 0)
                                .then(|| view! { <span class="cart-badge">{cart.cart_count()}</span> })
                        }}
                    </a>
                    <ThemeToggle/>
                </div>
            </div>
        </nav>
    }
}
