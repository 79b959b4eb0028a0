//! Shopping cart page.

use leptos::prelude::*;
use leptos_meta::Title;
use rust_decimal::Decimal;
use shophub_commerce::CartItem;

use crate::store::CartStore;

/// Order total above which shipping is free.
const FREE_SHIPPING_THRESHOLD: Decimal = Decimal::from_parts(50, 0, 0, false, 0);

/// Flat shipping cost below the threshold.
const FLAT_SHIPPING: Decimal = Decimal::from_parts(5, 0, 0, false, 0);

#[component]
pub fn CartPage() -> impl IntoView {
    let cart = expect_context::<CartStore>();

    view! {
        <Title text="Cart - ShopHub"/>
        {move || {
            if cart.is_empty() {
                view! { <EmptyCart/> }.into_any()
            } else {
                view! { <CartContents/> }.into_any()
            }
        }}
    }
}

#[component]
fn EmptyCart() -> impl IntoView {
    view! {
        <div class="empty-state">
            <span class="empty-icon">"\u{1f6cd}\u{fe0f}"</span>
            <h1>"Your cart is empty"</h1>
            <p class="muted">"Add some products to your cart to see them here"</p>
            <a href="/products" class="btn">"Browse Products"</a>
        </div>
    }
}

#[component]
fn CartContents() -> impl IntoView {
    let cart = expect_context::<CartStore>();

    let shipping = move || {
        if cart.cart_total() > FREE_SHIPPING_THRESHOLD {
            Decimal::ZERO
        } else {
            FLAT_SHIPPING
        }
    };

    view! {
        <div class="page-header">
            <h1>"Shopping Cart"</h1>
            <p class="muted">
                {move || {
                    let lines = cart.unique_count();
                    let noun = if lines == 1 { "item" } else { "items" };
                    format!("{lines} {noun} in your cart")
                }}
            </p>
        </div>

        <div class="cart-layout">
            <div class="cart-lines">
                {move || {
                    cart.items()
                        .into_iter()
                        .map(|item| view! { <CartLine item=item/> })
                        .collect::<Vec<_>>()
                }}
                <button class="btn btn-outline wide" on:click=move |_| cart.clear_cart()>
                    "Clear Cart"
                </button>
            </div>

            <div class="card summary">
                <h2>"Order Summary"</h2>
                <div class="summary-row">
                    <span class="muted">"Subtotal"</span>
                    <span>{move || cart.cart_total_display()}</span>
                </div>
                <div class="summary-row">
                    <span class="muted">"Shipping"</span>
                    <span>
                        {move || {
                            if shipping() == Decimal::ZERO {
                                "Free".to_string()
                            } else {
                                format!("${:.2}", shipping())
                            }
                        }}
                    </span>
                </div>
                <div class="summary-row summary-total">
                    <span>"Total"</span>
                    <span>{move || format!("${:.2}", cart.cart_total() + shipping())}</span>
                </div>
                {move || {
                    let total = cart.cart_total();
                    (total < FREE_SHIPPING_THRESHOLD).then(|| {
                        view! {
                            <p class="hint">
                                {format!(
                                    "Add ${:.2} more for free shipping",
                                    FREE_SHIPPING_THRESHOLD - total
                                )}
                            </p>
                        }
                    })
                }}
                <button class="btn wide">"Proceed to Checkout"</button>
                <a href="/products" class="btn btn-outline wide">"Continue Shopping"</a>
            </div>
        </div>
    }
}

#[component]
fn CartLine(item: CartItem) -> impl IntoView {
    let cart = expect_context::<CartStore>();

    let id = item.product.id;
    let quantity = item.quantity;
    let line_total = item.subtotal_display();
    let unit_price = item.product.price_display();
    let detail_href = format!("/products/{id}");

    view! {
        <div class="card cart-line">
            <a href=detail_href.clone() class="cart-thumb">
                <img src=item.product.image.clone() alt=item.product.title.clone()/>
            </a>
            <div class="cart-line-body">
                <div class="cart-line-top">
                    <div>
                        <a href=detail_href>
                            <h3>{item.product.title.clone()}</h3>
                        </a>
                        <p class="product-category">{item.product.category.clone()}</p>
                    </div>
                    <div class="cart-line-price">
                        <p class="price">{line_total}</p>
                        <p class="muted">{unit_price} " each"</p>
                    </div>
                </div>
                <div class="cart-line-actions">
                    <div class="quantity-controls">
                        <button
                            class="btn-icon"
                            aria-label="Decrease quantity"
                            on:click=move |_| cart.update_quantity(id, i64::from(quantity) - 1)
                        >
                            "\u{2212}"
                        </button>
                        <span class="quantity">{quantity}</span>
                        <button
                            class="btn-icon"
                            aria-label="Increase quantity"
                            on:click=move |_| cart.update_quantity(id, i64::from(quantity) + 1)
                        >
                            "+"
                        </button>
                    </div>
                    <button class="btn-ghost danger" on:click=move |_| cart.remove_from_cart(id)>
                        "Remove"
                    </button>
                </div>
            </div>
        </div>
    }
}
