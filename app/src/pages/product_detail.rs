//! Single product page.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;
use shophub_catalog::CatalogClient;
use shophub_commerce::{Product, ProductId};

use crate::components::{ProductDetailSkeleton, StarRating};
use crate::store::CartStore;

#[component]
pub fn ProductDetailPage() -> impl IntoView {
    let catalog = expect_context::<CatalogClient>();
    let params = use_params_map();

    let product = RwSignal::new(None::<Product>);
    let loading = RwSignal::new(true);

    Effect::new(move |_| {
        let id = params.with(|p| p.get("id").and_then(|raw| raw.parse::<u32>().ok()));
        let catalog = catalog.clone();
        loading.set(true);
        product.set(None);
        spawn_local(async move {
            if let Some(id) = id {
                match catalog.product(ProductId::new(id)).await {
                    Ok(found) => product.set(found),
                    Err(e) => tracing::warn!("failed to load product {id}: {e}"),
                }
            }
            loading.set(false);
        });
    });

    view! {
        <a href="/products" class="btn-ghost back-link">"\u{2190} Back to Products"</a>
        {move || {
            if loading.get() {
                return view! { <ProductDetailSkeleton/> }.into_any();
            }
            match product.get() {
                Some(p) => view! { <ProductDetailView product=p/> }.into_any(),
                None => view! {
                    <div class="empty-state">
                        <h1>"Product not found"</h1>
                        <a href="/products" class="btn">"Back to Products"</a>
                    </div>
                }.into_any(),
            }
        }}
    }
}

#[component]
fn ProductDetailView(product: Product) -> impl IntoView {
    let cart = expect_context::<CartStore>();
    let added = RwSignal::new(false);

    let stars = product.rating_stars();
    let rate = product.rating.rate.to_string();
    let review_count = product.rating.count;
    let price = product.price_display();
    let add_product = product.clone();

    view! {
        <Title text=format!("{} - ShopHub", product.title)/>

        <div class="detail-grid">
            <div class="detail-media">
                <img src=product.image.clone() alt=product.title.clone()/>
            </div>
            <div class="detail-body">
                <span class="badge">{product.category.clone()}</span>
                <h1>{product.title.clone()}</h1>
                <div class="product-rating">
                    <StarRating stars=stars/>
                    <span>{rate}</span>
                    <span class="muted">"(" {review_count} " reviews)"</span>
                </div>

                <h2 class="section-label">"Description"</h2>
                <p class="detail-description">{product.description.clone()}</p>

                <p class="detail-price">{price}</p>

                <div class="detail-actions">
                    <button
                        class="btn"
                        on:click=move |_| {
                            cart.add_to_cart(add_product.clone());
                            added.set(true);
                        }
                    >
                        "Add to Cart"
                    </button>
                    <a href="/cart" class="btn btn-outline">"View Cart"</a>
                </div>
                {move || {
                    added
                        .get()
                        .then(|| view! { <p class="added-note">"Added to cart."</p> })
                }}

                <div class="card perks">
                    <ul>
                        <li>"Free shipping on orders over $50"</li>
                        <li>"30-day return policy"</li>
                        <li>"Secure checkout"</li>
                    </ul>
                </div>
            </div>
        </div>
    }
}
