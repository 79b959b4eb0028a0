//! Application shell, routes and composition root.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use shophub_catalog::CatalogClient;
use shophub_storage::Store;

use crate::components::{Navigation, ThemeStore};
use crate::pages::{CartPage, DashboardPage, NotFound, ProductDetailPage, ProductsPage};
use crate::store::CartStore;

/// HTML shell for server rendering.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    use leptos::hydration::{AutoReload, HydrationScripts};

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root component: constructs the shared collaborators exactly once and
/// provides them to every page through context.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Composition root. The cart store and theme store share the same
    // client-local storage; the catalog client is the only way product
    // data enters the application.
    let storage = Store::local();
    let _cart = CartStore::provide(storage.clone());
    let theme = ThemeStore::provide(storage);
    provide_context(CatalogClient::from_env());

    let fallback = || view! { <NotFound/> }.into_view();

    view! {
        <Html {..} data-theme=move || theme.theme().as_str()/>
        <Stylesheet id="leptos" href="/pkg/shophub.css"/>
        <Meta name="description" content="Browse and shop from our wide selection of products."/>
        <Title text="ShopHub - Your Online Store"/>

        <Router>
            <Navigation/>
            <main class="container">
                <Routes fallback>
                    <Route path=path!("") view=DashboardPage/>
                    <Route path=path!("/dashboard") view=DashboardPage/>
                    <Route path=path!("/products") view=ProductsPage/>
                    <Route path=path!("/products/:id") view=ProductDetailPage/>
                    <Route path=path!("/cart") view=CartPage/>
                    <Route path=path!("/*any") view=NotFound/>
                </Routes>
            </main>
        </Router>
    }
}
