//! Product Form Component
//!
//! Create/edit form of the admin page. Inputs are kept as text and only
//! converted to a `ProductDraft` on submit.

use leptos::prelude::*;
use storefront_api::{Product, ProductDraft};

const DEFAULT_RATING: f64 = 5.0;

/// Raw form inputs
#[derive(Clone, Debug, PartialEq)]
pub struct FormFields {
    pub image: String,
    pub brand: String,
    pub product_name: String,
    pub price: String,
    pub original_price: String,
    pub review_count: String,
    pub rating: String,
    pub free_shipping: bool,
    pub free_shipping_condition: String,
}

impl Default for FormFields {
    fn default() -> Self {
        Self {
            image: String::new(),
            brand: String::new(),
            product_name: String::new(),
            price: String::new(),
            original_price: String::new(),
            review_count: String::new(),
            rating: DEFAULT_RATING.to_string(),
            free_shipping: false,
            free_shipping_condition: String::new(),
        }
    }
}

fn optional_text(value: Option<impl ToString>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

impl FormFields {
    pub fn from_product(product: &Product) -> Self {
        let draft = &product.draft;
        Self {
            image: draft.image.clone(),
            brand: draft.brand.clone(),
            product_name: draft.product_name.clone(),
            price: draft.price.to_string(),
            original_price: optional_text(draft.original_price),
            review_count: optional_text(draft.review_count),
            rating: draft.rating.unwrap_or(DEFAULT_RATING).to_string(),
            free_shipping: draft.free_shipping.unwrap_or(false),
            free_shipping_condition: draft.free_shipping_condition.clone().unwrap_or_default(),
        }
    }

    /// Validate the inputs.
    ///
    /// The draft never carries `sortOrder`: catalog position is owned by the
    /// reorder endpoint, and a value read before a drag would be stale.
    pub fn to_draft(&self) -> Result<ProductDraft, String> {
        let required = |value: &str, label: &str| {
            let value = value.trim();
            if value.is_empty() {
                Err(format!("{} is required", label))
            } else {
                Ok(value.to_string())
            }
        };
        let price = self
            .price
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|price| price.is_finite() && *price >= 0.0)
            .ok_or_else(|| "Price must be a number of at least 0".to_string())?;
        let original_price = match self.original_price.trim() {
            "" => None,
            raw => Some(
                raw.parse::<f64>()
                    .ok()
                    .filter(|original| original.is_finite() && *original >= 0.0)
                    .ok_or_else(|| "Original price must be a number".to_string())?,
            ),
        }
        .filter(|original: &f64| *original > 0.0);
        let review_count = match self.review_count.trim() {
            "" => None,
            raw => Some(
                raw.parse::<u32>()
                    .map_err(|_| "Review count must be a whole number".to_string())?,
            ),
        };
        let rating = match self.rating.trim() {
            "" => None,
            raw => Some(
                raw.parse::<f64>()
                    .ok()
                    .filter(|rating| (1.0..=5.0).contains(rating))
                    .ok_or_else(|| "Rating must be between 1 and 5".to_string())?,
            ),
        };
        let condition = self.free_shipping_condition.trim();

        Ok(ProductDraft {
            image: required(&self.image, "Image URL")?,
            brand: required(&self.brand, "Brand")?,
            product_name: required(&self.product_name, "Product name")?,
            price,
            original_price,
            review_count,
            rating,
            free_shipping: Some(self.free_shipping),
            free_shipping_condition: (!condition.is_empty()).then(|| condition.to_string()),
            sort_order: None,
        })
    }
}

/// Text inputs of the form
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextInput {
    Image,
    Brand,
    ProductName,
    Price,
    OriginalPrice,
    ReviewCount,
    Rating,
    ShippingCondition,
}

impl FormFields {
    fn text(&self, input: TextInput) -> &String {
        match input {
            TextInput::Image => &self.image,
            TextInput::Brand => &self.brand,
            TextInput::ProductName => &self.product_name,
            TextInput::Price => &self.price,
            TextInput::OriginalPrice => &self.original_price,
            TextInput::ReviewCount => &self.review_count,
            TextInput::Rating => &self.rating,
            TextInput::ShippingCondition => &self.free_shipping_condition,
        }
    }

    fn text_mut(&mut self, input: TextInput) -> &mut String {
        match input {
            TextInput::Image => &mut self.image,
            TextInput::Brand => &mut self.brand,
            TextInput::ProductName => &mut self.product_name,
            TextInput::Price => &mut self.price,
            TextInput::OriginalPrice => &mut self.original_price,
            TextInput::ReviewCount => &mut self.review_count,
            TextInput::Rating => &mut self.rating,
            TextInput::ShippingCondition => &mut self.free_shipping_condition,
        }
    }
}

#[component]
fn TextField(
    label: &'static str,
    #[prop(default = "text")] kind: &'static str,
    fields: RwSignal<FormFields>,
    input: TextInput,
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span>{label}</span>
            <input
                type=kind
                prop:value=move || fields.with(|f| f.text(input).clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    fields.update(|f| *f.text_mut(input) = value);
                }
            />
        </label>
    }
}

/// Create/edit form
///
/// `editing` switches the heading and submit label; `on_cancel` is only
/// offered while editing.
#[component]
pub fn ProductForm(
    fields: RwSignal<FormFields>,
    #[prop(into)] editing: Signal<bool>,
    #[prop(into)] on_submit: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(());
    };

    view! {
        <form class="product-form" on:submit=submit>
            <h2>{move || if editing.get() { "Edit product" } else { "Add product" }}</h2>
            <div class="form-grid">
                <TextField label="Image URL" fields=fields input=TextInput::Image />
                <TextField label="Brand" fields=fields input=TextInput::Brand />
                <TextField label="Product name" fields=fields input=TextInput::ProductName />
                <TextField label="Price" kind="number" fields=fields input=TextInput::Price />
                <TextField label="Original price" kind="number" fields=fields input=TextInput::OriginalPrice />
                <TextField label="Review count" kind="number" fields=fields input=TextInput::ReviewCount />
                <TextField label="Rating (1-5)" kind="number" fields=fields input=TextInput::Rating />
                <label class="form-field checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || fields.with(|f| f.free_shipping)
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            fields.update(|f| f.free_shipping = checked);
                        }
                    />
                    <span>"Free shipping"</span>
                </label>
                <TextField label="Shipping condition" fields=fields input=TextInput::ShippingCondition />
            </div>
            <div class="form-actions">
                <button type="submit" class="primary-btn">
                    {move || if editing.get() { "Save" } else { "Add" }}
                </button>
                <Show when=move || editing.get()>
                    <button type="button" class="secondary-btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                </Show>
            </div>
        </form>
    }
}
