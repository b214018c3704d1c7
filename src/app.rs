//! Storefront Frontend App
//!
//! Navigation bar, routed pages and the toast stack.

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    StaticSegment,
};
use storefront_api::ApiConfig;

use crate::components::{Navigation, ToastStack};
use crate::context::AppContext;
use crate::pages::{CalculatorPage, Home, NotFound, ProductAdmin};

/// Route paths
pub mod routes {
    pub const HOME: &str = "/";
    pub const CALCULATOR: &str = "/calculator";
    pub const ADMIN_PRODUCTS: &str = "/admin/products";
}

#[component]
pub fn App(api_config: ApiConfig) -> impl IntoView {
    provide_context(AppContext::new(api_config));

    view! {
        <Router>
            <div class="app-layout">
                <Navigation />
                <main class="main-content">
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=StaticSegment("") view=Home />
                        <Route path=StaticSegment("calculator") view=CalculatorPage />
                        <Route path=(StaticSegment("admin"), StaticSegment("products")) view=ProductAdmin />
                    </Routes>
                </main>
                <ToastStack />
            </div>
        </Router>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_constants_are_unique() {
        let all = [routes::HOME, routes::CALCULATOR, routes::ADMIN_PRODUCTS];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert!(all.iter().all(|route| route.starts_with('/')));
    }
}
