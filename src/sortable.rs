//! Sortable Product List
//!
//! Reactive binding around `ReorderController` shared by the catalog grid
//! and the admin table. The controller stays the source of truth; the
//! signals below only mirror what it reports.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reorder_core::{order_of, MoveIntent, MoveOutcome, ReorderController, ReorderError};
use storefront_api::{Product, ProductApi, ProductId};

use crate::context::AppContext;

#[derive(Clone, Debug, PartialEq)]
pub enum LoadState {
    Loading,
    Ready,
    Failed(String),
}

struct Inner {
    controller: ReorderController<Product, ProductApi>,
    api: ProductApi,
}

#[derive(Clone, Copy)]
pub struct SortableProducts {
    /// Current visible order, optimistic moves included
    pub items: RwSignal<Vec<Product>>,
    pub load_state: RwSignal<LoadState>,
    /// Bumped after every successful load so rows re-render edited fields
    pub generation: RwSignal<u64>,
    inner: StoredValue<Inner, LocalStorage>,
    ctx: AppContext,
}

impl SortableProducts {
    /// Create the binding and start the first load
    pub fn new(ctx: AppContext) -> Self {
        let api = ProductApi::new(ctx.api_config());
        let controller = ReorderController::new(api.clone());
        let items = RwSignal::new(Vec::new());
        controller.on_change(move |current: &[Product]| {
            // late commits may land after the page is gone
            let _ = items.try_set(current.to_vec());
        });

        let sortable = Self {
            items,
            load_state: RwSignal::new(LoadState::Loading),
            generation: RwSignal::new(0),
            inner: StoredValue::new_local(Inner { controller, api }),
            ctx,
        };
        sortable.reload();
        sortable
    }

    /// Ids in visible order
    pub fn order(&self) -> Signal<Vec<ProductId>> {
        let items = self.items;
        Signal::derive(move || items.with(|items| order_of(items)))
    }

    pub fn api(&self) -> Option<ProductApi> {
        self.inner.try_with_value(|inner| inner.api.clone())
    }

    /// Replace the collection with the store's current catalog
    pub fn reload(&self) {
        let Some((controller, api)) = self
            .inner
            .try_with_value(|inner| (inner.controller.clone(), inner.api.clone()))
        else {
            return;
        };
        let this = *self;
        this.load_state.set(LoadState::Loading);

        spawn_local(async move {
            let loaded = controller.load(async move { api.list_products().await }).await;
            let state = match loaded {
                Ok(()) => {
                    let _ = this.generation.try_update(|generation| *generation += 1);
                    LoadState::Ready
                }
                Err(err) => LoadState::Failed(err.to_string()),
            };
            let _ = this.load_state.try_set(state);
        });
    }

    /// Apply a move locally and save the new order in the background
    pub fn move_item(&self, intent: MoveIntent<ProductId>) {
        let Some(controller) = self.inner.try_with_value(|inner| inner.controller.clone()) else {
            return;
        };
        // the optimistic update happens here, before the commit is polled
        let commit = controller.move_item(intent);
        let ctx = self.ctx;

        spawn_local(async move {
            match commit.await {
                Ok(MoveOutcome::Committed(order)) => {
                    tracing::debug!(count = order.len(), "order saved");
                }
                Ok(MoveOutcome::Unchanged | MoveOutcome::Discarded) => {}
                Err(ReorderError::CommitInFlight) => {
                    tracing::debug!("move ignored while saving");
                }
                Err(err) => ctx.error(err.to_string()),
            }
        });
    }
}
