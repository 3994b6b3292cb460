//! Leptos DragDrop Utilities
//!
//! Mouse-event drag-and-drop for a flat, index-ordered list.
//! Uses a movement threshold to distinguish click from drag; the hovered row
//! index is the drop target and a document-level mouseup completes the move.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Movement threshold in pixels to start dragging
pub const DRAG_THRESHOLD_PX: i32 = 5;

/// How long clicks are suppressed after a drag ends
const CLICK_SUPPRESS_MS: u32 = 100;

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    /// Index of the row being dragged
    pub dragging_read: ReadSignal<Option<usize>>,
    pub dragging_write: WriteSignal<Option<usize>>,
    /// Index of the row under the pointer
    pub hover_read: ReadSignal<Option<usize>>,
    pub hover_write: WriteSignal<Option<usize>>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pending row (mousedown but not yet dragging)
    pub pending_read: ReadSignal<Option<usize>>,
    pub pending_write: WriteSignal<Option<usize>>,
    /// Start position for movement detection
    pub start_read: ReadSignal<(i32, i32)>,
    pub start_write: WriteSignal<(i32, i32)>,
}

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_read, dragging_write) = signal(None::<usize>);
    let (hover_read, hover_write) = signal(None::<usize>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_read, pending_write) = signal(None::<usize>);
    let (start_read, start_write) = signal((0i32, 0i32));
    DndSignals {
        dragging_read,
        dragging_write,
        hover_read,
        hover_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_read,
        pending_write,
        start_read,
        start_write,
    }
}

/// True once the pointer has travelled far enough to count as a drag
pub fn exceeds_threshold(start: (i32, i32), current: (i32, i32)) -> bool {
    (current.0 - start.0).abs() > DRAG_THRESHOLD_PX || (current.1 - start.1).abs() > DRAG_THRESHOLD_PX
}

/// The move to perform for a drag from `dragging` released over `hovered`
pub fn resolve_drop(dragging: Option<usize>, hovered: Option<usize>) -> Option<(usize, usize)> {
    match (dragging, hovered) {
        (Some(from), Some(to)) if from != to => Some((from, to)),
        _ => None,
    }
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_write.set(None);
    dnd.hover_write.set(None);
    dnd.pending_write.set(None);
    dnd.drag_just_ended_write.set(true);

    let clear = dnd.drag_just_ended_write;
    Timeout::new(CLICK_SUPPRESS_MS, move || {
        let _ = clear.try_set(false);
    })
    .forget();
}

/// Mousedown handler for a row: records a pending drag with its start position
pub fn make_on_mousedown(dnd: DndSignals, index: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        // Form controls inside the row keep their own behavior
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some()
                || target.dyn_ref::<web_sys::HtmlButtonElement>().is_some()
                || target.dyn_ref::<web_sys::HtmlTextAreaElement>().is_some()
            {
                return;
            }
        }
        dnd.pending_write.set(Some(index));
        dnd.start_write.set((ev.client_x(), ev.client_y()));
    }
}

/// Mouseenter handler for a row: becomes the drop target while dragging
pub fn make_on_mouseenter(dnd: DndSignals, index: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_read.get_untracked().is_some() {
            dnd.hover_write.set(Some(index));
        }
    }
}

fn bind_global_mousemove(dnd: DndSignals) {
    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        // Listeners outlive the list they were bound for; disposed signals end here
        let Some(pending) = dnd.pending_read.try_get_untracked() else {
            return;
        };
        if pending.is_some() && dnd.dragging_read.get_untracked().is_none() {
            let start = dnd.start_read.get_untracked();
            if exceeds_threshold(start, (ev.client_x(), ev.client_y())) {
                dnd.dragging_write.set(pending);
                dnd.hover_write.set(pending);
            }
        }
    });

    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
    }
    on_mousemove.forget();
}

/// Bind document-level mouseup/mousemove; `on_drop(from, to)` runs for a completed drag
pub fn bind_global_mouseup<F>(dnd: DndSignals, on_drop: F)
where
    F: Fn(usize, usize) + 'static,
{
    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let Some(dragging) = dnd.dragging_read.try_get_untracked() else {
            return;
        };
        let hovered = dnd.hover_read.get_untracked();
        let was_dragging = dragging.is_some();

        if was_dragging {
            end_drag(&dnd);
        } else {
            // Plain click: the element's click handler fires normally
            dnd.pending_write.set(None);
        }
        if let Some((from, to)) = resolve_drop(dragging, hovered) {
            on_drop(from, to);
        }
    });

    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
    }
    on_mouseup.forget();

    bind_global_mousemove(dnd);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold() {
        assert!(!exceeds_threshold((10, 10), (15, 15)));
        assert!(exceeds_threshold((10, 10), (16, 10)));
        assert!(exceeds_threshold((10, 10), (10, 4)));
    }

    #[test]
    fn test_resolve_drop() {
        assert_eq!(resolve_drop(Some(0), Some(2)), Some((0, 2)));
        assert_eq!(resolve_drop(Some(1), Some(1)), None);
        assert_eq!(resolve_drop(None, Some(1)), None);
        assert_eq!(resolve_drop(Some(1), None), None);
    }
}
