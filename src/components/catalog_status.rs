//! Catalog Status Component

use leptos::prelude::*;

use crate::sortable::{LoadState, SortableProducts};

/// Loading, empty and failure states of a product listing
#[component]
pub fn CatalogStatus(sortable: SortableProducts) -> impl IntoView {
    move || {
        let empty = sortable.items.with(|items| items.is_empty());
        match sortable.load_state.get() {
            LoadState::Failed(message) => view! {
                <div class="load-error">
                    <p>"Could not load products: " {message}</p>
                    <button type="button" on:click=move |_| sortable.reload()>"Retry"</button>
                </div>
            }
            .into_any(),
            LoadState::Loading if empty => view! { <p class="load-status">"Loading products..."</p> }.into_any(),
            LoadState::Ready if empty => view! { <p class="load-status">"No products yet."</p> }.into_any(),
            _ => ().into_any(),
        }
    }
}
