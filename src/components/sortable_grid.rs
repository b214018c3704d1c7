//! Sortable Product Grid Component
//!
//! Catalog grid whose cards can be dragged (or moved with arrow keys) to a
//! new position. Uses leptos-dragdrop; each drop becomes one move intent.

use leptos::prelude::*;
use leptos_dragdrop::*;
use storefront_api::ProductId;

use crate::components::ProductCard;
use crate::sortable::SortableProducts;

#[component]
pub fn SortableProductGrid(sortable: SortableProducts) -> impl IntoView {
    let dnd = create_dnd_signals::<ProductId>();
    bind_global_mouse(dnd, move |intent| sortable.move_item(intent));

    let order = sortable.order();
    let (selected, set_selected) = signal(None::<ProductId>);

    view! {
        <div class="product-grid">
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

                    let card_class = {
                        let id = id.clone();
                        move || {
                            let mut c = String::from("sortable-card");
                            if selected.with(|selected| selected.as_ref() == Some(&id)) { c.push_str(" selected"); }
                            if dnd.is_dragging(&id) { c.push_str(" dragging"); }
                            if dnd.is_over(&id) { c.push_str(" drop-target"); }
                            c
                        }
                    };
                    let on_click = move |_: web_sys::MouseEvent| {
                        // a drag ends with a click on the dragged card
                        if !dnd.drag_just_ended_read.get_untracked() {
                            set_selected.set(Some(id.clone()));
                        }
                    };

                    view! {
                        <div
                            class=card_class
                            tabindex="0"
                            on:mousedown=on_mousedown
                            on:mouseenter=on_mouseenter
                            on:mouseleave=on_mouseleave
                            on:keydown=on_keydown
                            on:click=on_click
                        >
                            <ProductCard product=product />
                        </div>
                    }
                }
            />
        </div>
    }
}
