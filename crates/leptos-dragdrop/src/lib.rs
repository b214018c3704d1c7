//! Leptos DragDrop Utilities
//!
//! Simple sortable drag-and-drop for Leptos using mouse events.
//! Uses movement threshold to distinguish click from drag.
//! Every completed gesture (pointer drop or arrow key) is reported as a
//! `MoveIntent`: put the dragged item where the target item is.

use std::time::Duration;

use leptos::prelude::*;
use reorder_core::MoveIntent;
use wasm_bindgen::JsCast;

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

/// How long `drag_just_ended` stays set, so the trailing click is swallowed
const CLICK_SUPPRESS_MS: u64 = 100;

/// Ids usable as drag handles
pub trait DragId: Clone + PartialEq + Send + Sync + 'static {}

impl<T: Clone + PartialEq + Send + Sync + 'static> DragId for T {}

/// DnD state signals
pub struct DndSignals<I: 'static> {
    pub dragging_id_read: ReadSignal<Option<I>>,
    pub dragging_id_write: WriteSignal<Option<I>>,
    /// Item currently under the pointer while dragging
    pub over_id_read: ReadSignal<Option<I>>,
    pub over_id_write: WriteSignal<Option<I>>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pending item id (mousedown but not yet dragging)
    pub pending_id_read: ReadSignal<Option<I>>,
    pub pending_id_write: WriteSignal<Option<I>>,
    /// Start position for movement detection
    pub start_read: ReadSignal<(i32, i32)>,
    pub start_write: WriteSignal<(i32, i32)>,
}

impl<I> Clone for DndSignals<I> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<I> Copy for DndSignals<I> {}

impl<I: DragId> DndSignals<I> {
    pub fn is_dragging(&self, id: &I) -> bool {
        self.dragging_id_read.with(|dragging| dragging.as_ref() == Some(id))
    }

    pub fn is_over(&self, id: &I) -> bool {
        self.over_id_read.with(|over| over.as_ref() == Some(id))
    }
}

pub fn create_dnd_signals<I: DragId>() -> DndSignals<I> {
    let (dragging_id_read, dragging_id_write) = signal(None::<I>);
    let (over_id_read, over_id_write) = signal(None::<I>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_id_read, pending_id_write) = signal(None::<I>);
    let (start_read, start_write) = signal((0i32, 0i32));
    DndSignals {
        dragging_id_read,
        dragging_id_write,
        over_id_read,
        over_id_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_id_read,
        pending_id_write,
        start_read,
        start_write,
    }
}

/// What a released mouse button ended
#[derive(Clone, Debug, PartialEq)]
pub enum Release<I> {
    /// No drag had started; the trailing click belongs to the item
    Click,
    /// A drag ended, over `intent`'s target if there was one
    Drag { intent: Option<MoveIntent<I>> },
}

/// Clear the gesture state on mouseup.
///
/// `drag_just_ended` is only raised when a drag had actually started, so a
/// plain click is never swallowed.
pub fn release_pointer<I: DragId>(dnd: &DndSignals<I>) -> Release<I> {
    let dragging = dnd.dragging_id_read.get_untracked();
    let over = dnd.over_id_read.get_untracked();
    dnd.pending_id_write.set(None);

    let Some(dragged) = dragging else {
        return Release::Click;
    };
    dnd.dragging_id_write.set(None);
    dnd.over_id_write.set(None);
    dnd.drag_just_ended_write.set(true);
    Release::Drag {
        intent: over.map(|target| MoveIntent::new(dragged, target)),
    }
}

fn clear_drag_just_ended_later<I: DragId>(dnd: &DndSignals<I>) {
    let clear = dnd.drag_just_ended_write;
    set_timeout(
        move || {
            // the list may have been unmounted meanwhile
            let _ = clear.try_set(false);
        },
        Duration::from_millis(CLICK_SUPPRESS_MS),
    );
}

/// Create mousedown handler for draggable items
/// Records pending drag with start position
pub fn make_on_mousedown<I: DragId>(
    dnd: DndSignals<I>,
    item_id: I,
) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        // Ignore if target is input or button
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
        }
        dnd.pending_id_write.set(Some(item_id.clone()));
        dnd.start_write.set((ev.client_x(), ev.client_y()));
    }
}

/// Create mouseenter handler for items (become the drop target)
pub fn make_on_item_mouseenter<I: DragId>(
    dnd: DndSignals<I>,
    item_id: I,
) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |_ev: web_sys::MouseEvent| {
        let dragging = dnd.dragging_id_read.get_untracked();
        // Don't allow dropping on self
        if matches!(dragging, Some(ref dragged) if *dragged != item_id) {
            dnd.over_id_write.set(Some(item_id.clone()));
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave<I: DragId>(
    dnd: DndSignals<I>,
) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.get_untracked().is_some() {
            dnd.over_id_write.set(None);
        }
    }
}

/// Bind window mousemove/mouseup handlers for the lifetime of the current
/// reactive owner. `on_drop` receives one intent per completed drag.
pub fn bind_global_mouse<I, F>(dnd: DndSignals<I>, on_drop: F)
where
    I: DragId,
    F: Fn(MoveIntent<I>) + 'static,
{
    let move_handle = window_event_listener(leptos::ev::mousemove, move |ev| {
        // If we have a pending drag and haven't started dragging yet
        let Some(pending) = dnd.pending_id_read.try_get_untracked().flatten() else {
            return;
        };
        if dnd.dragging_id_read.get_untracked().is_some() {
            return;
        }
        let (start_x, start_y) = dnd.start_read.get_untracked();
        let dx = (ev.client_x() - start_x).abs();
        let dy = (ev.client_y() - start_y).abs();
        if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
            dnd.dragging_id_write.set(Some(pending));
        }
    });

    let up_handle = window_event_listener(leptos::ev::mouseup, move |_ev| {
        // the list may have been unmounted meanwhile
        if dnd.dragging_id_read.try_get_untracked().is_none() {
            return;
        }
        if let Release::Drag { intent } = release_pointer(&dnd) {
            clear_drag_just_ended_later(&dnd);
            if let Some(intent) = intent {
                on_drop(intent);
            }
        }
    });

    on_cleanup(move || {
        move_handle.remove();
        up_handle.remove();
    });
}

/// Translate a key press on the focused item into a move intent.
///
/// ArrowLeft/ArrowUp target the previous item, ArrowRight/ArrowDown the
/// next one, Home the first and End the last.
pub fn keyboard_intent<I: Clone + PartialEq>(
    order: &[I],
    focused: &I,
    key: &str,
) -> Option<MoveIntent<I>> {
    let index = order.iter().position(|id| id == focused)?;
    let target_index = match key {
        "ArrowLeft" | "ArrowUp" => index.checked_sub(1)?,
        "ArrowRight" | "ArrowDown" => index + 1,
        "Home" => 0,
        "End" => order.len() - 1,
        _ => return None,
    };
    let target = order.get(target_index)?;
    (target != focused).then(|| MoveIntent::new(focused.clone(), target.clone()))
}

/// Create keydown handler for focusable items
pub fn make_on_keydown<I, F>(
    order: Signal<Vec<I>>,
    item_id: I,
    on_intent: F,
) -> impl Fn(web_sys::KeyboardEvent) + Clone + 'static
where
    I: DragId,
    F: Fn(MoveIntent<I>) + Clone + 'static,
{
    move |ev: web_sys::KeyboardEvent| {
        let intent = order.with_untracked(|ids| keyboard_intent(ids, &item_id, &ev.key()));
        if let Some(intent) = intent {
            ev.prevent_default();
            on_intent(intent);
        }
    }
}
