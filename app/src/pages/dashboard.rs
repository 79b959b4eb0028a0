//! Shopping dashboard: stat cards, quick actions, category links.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use shophub_catalog::CatalogClient;

use crate::components::StatSkeleton;
use crate::store::CartStore;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let cart = expect_context::<CartStore>();
    let catalog = expect_context::<CatalogClient>();

    let product_count = RwSignal::new(None::<usize>);
    let categories = RwSignal::new(None::<Vec<String>>);

    Effect::new(move |_| {
        let catalog = catalog.clone();
        spawn_local(async move {
            match catalog.products().await {
                Ok(products) => product_count.set(Some(products.len())),
                Err(e) => tracing::warn!("failed to load product stats: {e}"),
            }
            match catalog.categories().await {
                Ok(list) => categories.set(Some(list)),
                Err(e) => tracing::warn!("failed to load categories: {e}"),
            }
        });
    });

    view! {
        <Title text="Dashboard - ShopHub"/>

        <div class="page-header">
            <h1>"Dashboard"</h1>
            <p class="muted">"Welcome to your shopping dashboard. Track your products and cart."</p>
        </div>

        <div class="stats-grid">
            <StatCard
                title="Total Products"
                description="Available in store"
                value=Signal::derive(move || product_count.get().map(|n| n.to_string()))
            />
            <StatCard
                title="Categories"
                description="Product categories"
                value=Signal::derive(move || {
                    categories.with(|c| c.as_ref().map(|list| list.len().to_string()))
                })
            />
            <StatCard
                title="Cart Items"
                description="Items in your cart"
                value=Signal::derive(move || Some(cart.cart_count().to_string()))
            />
            <StatCard
                title="Cart Total"
                description="Total cart value"
                value=Signal::derive(move || Some(cart.cart_total_display()))
            />
        </div>

        <div class="dashboard-grid">
            <div class="card">
                <h2>"Quick Actions"</h2>
                <p class="muted">"Navigate to key areas"</p>
                <div class="action-list">
                    <a href="/products" class="btn btn-outline wide">"Browse Products"</a>
                    <a href="/cart" class="btn btn-outline wide">
                        {move || format!("View Cart ({})", cart.cart_count())}
                    </a>
                </div>
            </div>

            <div class="card">
                <h2>"Product Categories"</h2>
                <p class="muted">"Available product types"</p>
                {move || match categories.get() {
                    None => view! {
                        <div class="action-list">
                            <div class="skeleton" style="width: 100%; height: 2.25rem;"></div>
                            <div class="skeleton" style="width: 100%; height: 2.25rem;"></div>
                            <div class="skeleton" style="width: 100%; height: 2.25rem;"></div>
                            <div class="skeleton" style="width: 100%; height: 2.25rem;"></div>
                        </div>
                    }.into_any(),
                    Some(list) => view! {
                        <div class="action-list">
                            {list.into_iter().map(|category| {
                                let href = format!(
                                    "/products?category={}",
                                    urlencoding::encode(&category)
                                );
                                view! {
                                    <a href=href class="btn btn-ghost wide category-link">
                                        {category}
                                    </a>
                                }
                            }).collect::<Vec<_>>()}
                        </div>
                    }.into_any(),
                }}
            </div>
        </div>
    }
}

#[component]
fn StatCard(
    title: &'static str,
    description: &'static str,
    value: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="card stat-card">
            <span class="stat-title">{title}</span>
            {move || match value.get() {
                Some(v) => view! { <div class="stat-value">{v}</div> }.into_any(),
                None => view! { <StatSkeleton/> }.into_any(),
            }}
            <p class="stat-description">{description}</p>
        </div>
    }
}
