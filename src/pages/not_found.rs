//! Not Found page component

use leptos::prelude::*;

use crate::app::routes;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="page not-found-page">
            <h1>"Page not found"</h1>
            <a href=routes::HOME>"Back to the catalog"</a>
        </div>
    }
}
