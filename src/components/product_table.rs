//! Product Table Component
//!
//! Admin listing. Rows reorder the same way as the catalog grid: drag a row
//! onto another one, or focus it and use the arrow keys.

use leptos::prelude::*;
use leptos_dragdrop::*;
use storefront_api::{Product, ProductId};

use crate::components::{Badge, BadgeVariant, DeleteConfirmButton};
use crate::components::price::format_price;
use crate::sortable::SortableProducts;

#[component]
pub fn ProductTable(
    sortable: SortableProducts,
    #[prop(into)] on_edit: Callback<Product>,
    #[prop(into)] on_delete: Callback<ProductId>,
    /// Row being edited, highlighted
    editing: ReadSignal<Option<ProductId>>,
) -> impl IntoView {
    let dnd = create_dnd_signals::<ProductId>();
    bind_global_mouse(dnd, move |intent| sortable.move_item(intent));
    let order = sortable.order();

    view! {
        <table class="product-table">
            <thead>
                <tr>
                    <th>"ID"</th>
                    <th>"Brand"</th>
                    <th>"Name"</th>
                    <th>"Price"</th>
                    <th>"Shipping"</th>
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || sortable.items.get()
                    key=move |product| (sortable.generation.get_untracked(), product.id.clone())
                    children=move |product| {
                        let id = product.id.clone();
                        let on_mousedown = make_on_mousedown(dnd, id.clone());
                        let on_mouseenter = make_on_item_mouseenter(dnd, id.clone());
                        let on_mouseleave = make_on_mouseleave(dnd);
                        let on_keydown = make_on_keydown(order, id.clone(), move |intent| {
                            sortable.move_item(intent)
                        });

                        let row_class = {
                            let id = id.clone();
                            move || {
                                let mut c = String::from("product-row");
                                if editing.with(|editing| editing.as_ref() == Some(&id)) { c.push_str(" editing"); }
                                if dnd.is_dragging(&id) { c.push_str(" dragging"); }
                                if dnd.is_over(&id) { c.push_str(" drop-target"); }
                                c
                            }
                        };
                        let shipping = if product.draft.free_shipping.unwrap_or(false) {
                            view! { <Badge variant=BadgeVariant::Success>"Free"</Badge> }.into_any()
                        } else {
                            view! { <Badge>"Paid"</Badge> }.into_any()
                        };
                        let delete_id = id.clone();
                        let edited = product.clone();

                        view! {
                            <tr
                                class=row_class
                                tabindex="0"
                                on:mousedown=on_mousedown
                                on:mouseenter=on_mouseenter
                                on:mouseleave=on_mouseleave
                                on:keydown=on_keydown
                            >
                                <td><Badge variant=BadgeVariant::Primary>{id.to_string()}</Badge></td>
                                <td>{product.draft.brand}</td>
                                <td>{product.draft.product_name}</td>
                                <td>{format_price(product.draft.price)}</td>
                                <td>{shipping}</td>
                                <td class="row-actions">
                                    <button type="button" class="edit-btn" on:click=move |_| on_edit.run(edited.clone())>
                                        "Edit"
                                    </button>
                                    <DeleteConfirmButton on_confirm=move |_: ()| on_delete.run(delete_id.clone()) />
                                </td>
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
    }
}
