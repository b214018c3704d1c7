//! Product admin page component
//!
//! Create, edit, delete and reorder products. Every successful write
//! reloads the whole catalog from the store.

use leptos::prelude::*;
use leptos::task::spawn_local;
use storefront_api::{Product, ProductId};

use crate::components::{CatalogStatus, FormFields, ProductForm, ProductTable};
use crate::context::AppContext;
use crate::sortable::{LoadState, SortableProducts};

#[component]
pub fn ProductAdmin() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let sortable = SortableProducts::new(ctx);

    let fields = RwSignal::new(FormFields::default());
    let editing = RwSignal::new(None::<ProductId>);

    let reset_form = move || {
        fields.set(FormFields::default());
        editing.set(None);
    };

    let on_edit = move |product: Product| {
        fields.set(FormFields::from_product(&product));
        editing.set(Some(product.id));
    };

    let on_submit = move |_: ()| {
        let target = editing.get_untracked();
        let draft = match fields.with_untracked(|f| f.to_draft()) {
            Ok(draft) => draft,
            Err(message) => {
                ctx.error(message);
                return;
            }
        };
        let Some(api) = sortable.api() else { return };

        spawn_local(async move {
            let saved = match &target {
                Some(id) => api.update_product(id, &draft).await,
                None => api.create_product(&draft).await,
            };
            match saved {
                Ok(product) => {
                    let verb = if target.is_some() { "Updated" } else { "Added" };
                    ctx.success(format!("{} {}", verb, product.draft.product_name));
                    reset_form();
                    sortable.reload();
                }
                Err(err) => ctx.error(format!("Could not save product: {}", err)),
            }
        });
    };

    let on_delete = move |id: ProductId| {
        let Some(api) = sortable.api() else { return };
        spawn_local(async move {
            match api.delete_product(&id).await {
                Ok(()) => {
                    ctx.success("Product deleted");
                    if editing.with_untracked(|e| e.as_ref() == Some(&id)) {
                        reset_form();
                    }
                    sortable.reload();
                }
                Err(err) => ctx.error(format!("Could not delete product: {}", err)),
            }
        });
    };

    view! {
        <div class="page admin-page">
            <h1>"Manage products"</h1>
            <ProductForm
                fields=fields
                editing=Signal::derive(move || editing.with(|e| e.is_some()))
                on_submit=on_submit
                on_cancel=move |_: ()| reset_form()
            />
            <section class="admin-list">
                <h2>"Products"</h2>
                <CatalogStatus sortable=sortable />
                <Show when=move || sortable.load_state.with(|state| !matches!(state, LoadState::Failed(_)))>
                    <ProductTable
                        sortable=sortable
                        on_edit=on_edit
                        on_delete=on_delete
                        editing=editing.read_only()
                    />
                </Show>
            </section>
        </div>
    }
}
