//! Product card used by the listing grid.

use leptos::prelude::*;
use shophub_commerce::Product;

use crate::components::StarRating;
use crate::store::CartStore;

#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let cart = expect_context::<CartStore>();

    let href = format!("/products/{}", product.id);
    let price = product.price_display();
    let stars = product.rating_stars();
    let rating_count = product.rating.count;
    let add_product = product.clone();

    view! {
        <div class="product-card">
            <a href=href.clone() class="product-media">
                <img src=product.image.clone() alt=product.title.clone() loading="lazy"/>
            </a>
            <div class="product-info">
                <p class="product-category">{product.category.clone()}</p>
                <a href=href>
                    <h3 class="product-title">{product.title.clone()}</h3>
                </a>
                <div class="product-rating">
                    <StarRating stars=stars/>
                    <span class="rating-count">"(" {rating_count} ")"</span>
                </div>
                <div class="product-footer">
                    <span class="price">{price}</span>
                    <button
                        class="btn"
                        on:click=move |_| cart.add_to_cart(add_product.clone())
                    >
                        "Add to Cart"
                    </button>
                </div>
            </div>
        </div>
    }
}
