//! Leptos DragDrop Utilities
//!
//! HTML5 drag-and-drop for Leptos: draggable elements dropped onto zones.
//! The crate only tracks gesture state (is something dragging, which zone is
//! hovered). What a drop means is up to the caller's callbacks.

use leptos::prelude::*;
use web_sys::DragEvent;

/// MIME type used to carry the dragged element's payload
pub const DRAG_MIME: &str = "text/plain";

/// DnD state signals, generic over the zone identifier
#[derive(Clone, Copy)]
pub struct DndSignals<Z: Copy + PartialEq + Send + Sync + 'static> {
    pub hovered_zone_read: ReadSignal<Option<Z>>,
    pub hovered_zone_write: WriteSignal<Option<Z>>,
    pub dragging_read: ReadSignal<bool>,
    pub dragging_write: WriteSignal<bool>,
}

pub fn create_dnd_signals<Z: Copy + PartialEq + Send + Sync + 'static>() -> DndSignals<Z> {
    let (hovered_zone_read, hovered_zone_write) = signal(None::<Z>);
    let (dragging_read, dragging_write) = signal(false);
    DndSignals {
        hovered_zone_read,
        hovered_zone_write,
        dragging_read,
        dragging_write,
    }
}

impl<Z: Copy + PartialEq + Send + Sync + 'static> DndSignals<Z> {
    /// Is `zone` the zone currently under the pointer?
    pub fn is_hovered(&self, zone: Z) -> bool {
        self.hovered_zone_read.get() == Some(zone)
    }

    fn end(&self) {
        self.hovered_zone_write.set(None);
        self.dragging_write.set(false);
    }
}

/// dragstart handler for a draggable element carrying `payload`
pub fn make_on_dragstart<Z, F>(dnd: DndSignals<Z>, payload: String, on_start: F) -> impl Fn(DragEvent) + Clone + 'static
where
    Z: Copy + PartialEq + Send + Sync + 'static,
    F: Fn() + Clone + 'static,
{
    move |ev: DragEvent| {
        if let Some(dt) = ev.data_transfer() {
            // Firefox refuses to start a drag with no data set
            let _ = dt.set_data(DRAG_MIME, &payload);
            dt.set_effect_allowed("move");
        }
        dnd.dragging_write.set(true);
        on_start();
    }
}

/// dragover handler for a zone. Prevents the default so the zone accepts drops.
pub fn make_on_dragover<Z>(dnd: DndSignals<Z>, zone: Z) -> impl Fn(DragEvent) + Copy + 'static
where
    Z: Copy + PartialEq + Send + Sync + 'static,
{
    move |ev: DragEvent| {
        ev.prevent_default();
        if let Some(dt) = ev.data_transfer() {
            dt.set_drop_effect("move");
        }
        if dnd.hovered_zone_read.get_untracked() != Some(zone) {
            dnd.hovered_zone_write.set(Some(zone));
        }
    }
}

/// dragleave handler for a zone
pub fn make_on_dragleave<Z>(dnd: DndSignals<Z>, zone: Z) -> impl Fn(DragEvent) + Copy + 'static
where
    Z: Copy + PartialEq + Send + Sync + 'static,
{
    move |_ev: DragEvent| {
        if dnd.hovered_zone_read.get_untracked() == Some(zone) {
            dnd.hovered_zone_write.set(None);
        }
    }
}

/// drop handler for a zone. `on_drop` receives the zone and the payload
/// set at dragstart, if the browser handed it back.
pub fn make_on_drop<Z, F>(dnd: DndSignals<Z>, zone: Z, on_drop: F) -> impl Fn(DragEvent) + Clone + 'static
where
    Z: Copy + PartialEq + Send + Sync + 'static,
    F: Fn(Z, Option<String>) + Clone + 'static,
{
    move |ev: DragEvent| {
        ev.prevent_default();
        let payload = ev
            .data_transfer()
            .and_then(|dt| dt.get_data(DRAG_MIME).ok())
            .filter(|p| !p.is_empty());
        dnd.end();
        on_drop(zone, payload);
    }
}

/// dragend handler for the draggable element.
///
/// Fires after `drop` when the gesture landed on a zone, and on its own when
/// it ended anywhere else, so `on_end` must be harmless after a drop.
pub fn make_on_dragend<Z, F>(dnd: DndSignals<Z>, on_end: F) -> impl Fn(DragEvent) + Clone + 'static
where
    Z: Copy + PartialEq + Send + Sync + 'static,
    F: Fn() + Clone + 'static,
{
    move |ev: DragEvent| {
        let dropped = ev
            .data_transfer()
            .map(|dt| dt.drop_effect() != "none")
            .unwrap_or(false);
        if !dropped {
            log::debug!("[DND] gesture ended outside a drop zone");
        }
        dnd.end();
        on_end();
    }
}
