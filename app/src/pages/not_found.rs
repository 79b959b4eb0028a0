//! 404 page.

use leptos::prelude::*;

#[component]
pub fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(resp) = use_context::<leptos_axum::ResponseOptions>() {
            resp.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <div class="empty-state">
            <h1>"404"</h1>
            <p class="muted">"Page not found"</p>
            <a href="/dashboard" class="btn">"Back to Dashboard"</a>
        </div>
    }
}
