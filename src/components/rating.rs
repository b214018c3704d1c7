//! Rating Component

use leptos::prelude::*;

use super::price::format_price;

/// Star, score and review count; renders nothing without reviews
#[component]
pub fn Rating(value: f64, count: u32) -> impl IntoView {
    (count > 0).then(|| view! {
        <div class="rating">
            <span class="rating-star">"★"</span>
            <span>{value}</span>
            <span class="rating-count">"(" {format_price(f64::from(count))} ")"</span>
        </div>
    })
}
