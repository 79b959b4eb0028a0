//! Product listing page with optional category filtering.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::hooks::use_query_map;
use shophub_catalog::CatalogClient;
use shophub_commerce::Product;

use crate::components::{ProductCard, ProductGridSkeleton};

#[component]
pub fn ProductsPage() -> impl IntoView {
    let catalog = expect_context::<CatalogClient>();
    let query = use_query_map();
    let category = move || query.with(|q| q.get("category"));

    let products = RwSignal::new(None::<Vec<Product>>);

    Effect::new(move |_| {
        let catalog = catalog.clone();
        spawn_local(async move {
            match catalog.products().await {
                Ok(list) => products.set(Some(list)),
                Err(e) => {
                    tracing::warn!("failed to load products: {e}");
                    products.set(Some(Vec::new()));
                }
            }
        });
    });

    // The full catalog is fetched once; the category filter narrows it
    // client-side as the query parameter changes.
    let filtered = move || {
        products.get().map(|list| match category() {
            Some(wanted) => list
                .into_iter()
                .filter(|p| p.category == wanted)
                .collect::<Vec<_>>(),
            None => list,
        })
    };

    view! {
        <Title text="Products - ShopHub"/>

        <div class="page-header">
            <h1>
                {move || match category() {
                    Some(c) => c,
                    None => "All Products".to_string(),
                }}
            </h1>
            <p class="muted">"Browse and shop from our wide selection of products"</p>
        </div>

        {move || match filtered() {
            None => view! { <ProductGridSkeleton/> }.into_any(),
            Some(list) if list.is_empty() => view! {
                <div class="empty-state">
                    <p class="muted">"No products found."</p>
                    <a href="/products" class="btn btn-outline">"View all products"</a>
                </div>
            }.into_any(),
            Some(list) => view! {
                <div class="products">
                    {list
                        .into_iter()
                        .map(|product| view! { <ProductCard product=product/> })
                        .collect::<Vec<_>>()}
                </div>
            }.into_any(),
        }}
    }
}
