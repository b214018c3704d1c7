//! Storefront Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod keypad;
mod logging;
mod pages;
mod sortable;

use app::App;
use leptos::prelude::*;
use storefront_api::ApiConfig;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(config::log_level());

    match ApiConfig::from_env() {
        Ok(api_config) => {
            tracing::info!(base_url = %api_config.base_url(), "starting storefront");
            mount_to_body(move || view! { <App api_config=api_config.clone() /> });
        }
        Err(err) => {
            tracing::error!(error = %err, "invalid API configuration");
            mount_to_body(move || view! { <p class="fatal-error">{err.to_string()}</p> });
        }
    }
}
