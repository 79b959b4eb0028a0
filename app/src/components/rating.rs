//! Five-star rating row.

use leptos::prelude::*;

/// Renders five stars with the first `stars` filled.
#[component]
pub fn StarRating(stars: u32) -> impl IntoView {
    view! {
        <span class="stars" aria-hidden="true">
            {(0..5u32)
                .map(|i| {
                    let class = if i < stars { "star filled" } else { "star" };
                    view! { <span class=class>"\u{2605}"</span> }
                })
                .collect::<Vec<_>>()}
        </span>
    }
}
