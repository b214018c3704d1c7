//! Navigation Component

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::app::routes;

const LINKS: [(&str, &str); 3] = [
    (routes::HOME, "Home"),
    (routes::CALCULATOR, "Calculator"),
    (routes::ADMIN_PRODUCTS, "Manage products"),
];

/// Top bar; the link of the current route is highlighted
#[component]
pub fn Navigation() -> impl IntoView {
    let pathname = use_location().pathname;

    view! {
        <nav class="nav-bar">
            {LINKS.into_iter().map(|(path, label)| {
                let class = move || {
                    if pathname.get() == path { "nav-link active" } else { "nav-link" }
                };
                view! { <a href=path class=class>{label}</a> }
            }).collect_view()}
        </nav>
    }
}
