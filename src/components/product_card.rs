//! Product Card Component
//!
//! Catalog tile: image, brand, name, price, shipping and rating.

use leptos::prelude::*;
use storefront_api::Product;

use super::badge::{Badge, BadgeVariant};
use super::price::Price;
use super::rating::Rating;

const DEFAULT_SHIPPING_LABEL: &str = "Free shipping";

/// Swatch colour shown when a product image fails to load.
///
/// Derived from the label alone (FNV-1a), so a product keeps its colour
/// across reloads and reorders.
pub fn fallback_color(label: &str) -> String {
    let hash = label.bytes().fold(0x811c_9dc5_u32, |hash, byte| {
        (hash ^ u32::from(byte)).wrapping_mul(0x0100_0193)
    });
    format!("hsl({}, 45%, 72%)", hash % 360)
}

/// Percentage saved against the original price, if discounted
pub fn discount_percent(price: f64, original: Option<f64>) -> Option<u32> {
    let original = original.filter(|&original| original > price && original > 0.0)?;
    Some(((original - price) * 100.0 / original).floor() as u32)
}

/// Image with a coloured placeholder when the source is broken
#[component]
fn ProductImage(src: String, alt: String) -> impl IntoView {
    let (broken, set_broken) = signal(false);
    let swatch = format!("background-color: {}", fallback_color(&alt));
    let initial = alt.chars().next().unwrap_or('?').to_string();

    view! {
        <div class="product-image">
            <Show
                when=move || !broken.get()
                fallback=move || view! {
                    <div class="product-image-fallback" style=swatch.clone()>{initial.clone()}</div>
                }
            >
                <img src=src.clone() alt=alt.clone() draggable="false" on:error=move |_| set_broken.set(true) />
            </Show>
        </div>
    }
}

#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let draft = product.draft;
    let discount = discount_percent(draft.price, draft.original_price);
    let shipping = draft.free_shipping.unwrap_or(false).then(|| {
        draft
            .free_shipping_condition
            .filter(|condition| !condition.is_empty())
            .unwrap_or_else(|| DEFAULT_SHIPPING_LABEL.to_string())
    });

    view! {
        <div class="product-card">
            <ProductImage src=draft.image alt=draft.product_name.clone() />
            <div class="product-content">
                <div class="product-brand">
                    <span>{draft.brand}</span>
                    <span class="product-brand-arrow">">"</span>
                </div>
                <h3 class="product-name">{draft.product_name}</h3>
                <div class="product-price-row">
                    <Price value=draft.price original=draft.original_price />
                    {discount.map(|percent| view! {
                        <Badge variant=BadgeVariant::Warning>{format!("-{}%", percent)}</Badge>
                    })}
                </div>
                {shipping.map(|label| view! { <div class="product-shipping">{label}</div> })}
                <Rating value=draft.rating.unwrap_or(0.0) count=draft.review_count.unwrap_or(0) />
            </div>
        </div>
    }
}
