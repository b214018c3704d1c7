//! Catalog page component

use leptos::prelude::*;

use crate::components::{CatalogStatus, SortableProductGrid};
use crate::context::AppContext;
use crate::sortable::{LoadState, SortableProducts};

/// Product grid in catalog order; cards can be rearranged in place
#[component]
pub fn Home() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let sortable = SortableProducts::new(ctx);

    view! {
        <div class="page home-page">
            <CatalogStatus sortable=sortable />
            <Show when=move || sortable.load_state.with(|state| !matches!(state, LoadState::Failed(_)))>
                <SortableProductGrid sortable=sortable />
            </Show>
        </div>
    }
}
