//! Leptos DragDrop Utilities
//!
//! Simple drag-and-drop for Leptos using mouse events.
//! Uses movement threshold to distinguish click from drag.
//!
//! The gesture state lives in a single `RwSignal<DragPhase>`; the pure
//! transitions are in [`machine`]. Items and drop targets are generic so the
//! same handlers serve any list/target pairing.

pub mod machine;

use leptos::prelude::*;
use wasm_bindgen::closure::{Closure, WasmClosure};
use wasm_bindgen::JsCast;

pub use machine::{crosses_threshold, DragPhase, DRAG_THRESHOLD_PX};

/// Delay after a drop during which item clicks are swallowed
const CLICK_SUPPRESS_MS: i32 = 100;

/// Elements that keep their own mouse behaviour inside a draggable item
const INTERACTIVE_SELECTOR: &str = "input, textarea, select, button";

/// DnD state signals
pub struct DndSignals<I: Send + Sync + 'static, T: Send + Sync + 'static> {
    pub phase: RwSignal<DragPhase<I, T>>,
    /// Set for a short moment after a drag ends so the trailing click is ignored
    pub drag_just_ended: RwSignal<bool>,
}

impl<I: Send + Sync + 'static, T: Send + Sync + 'static> Clone for DndSignals<I, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<I: Send + Sync + 'static, T: Send + Sync + 'static> Copy for DndSignals<I, T> {}

pub fn create_dnd_signals<I, T>() -> DndSignals<I, T>
where
    I: Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    DndSignals {
        phase: RwSignal::new(DragPhase::Idle),
        drag_just_ended: RwSignal::new(false),
    }
}

/// Mark the end of a real drag and schedule the click guard to clear.
pub fn end_drag<I, T>(dnd: &DndSignals<I, T>)
where
    I: Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    dnd.drag_just_ended.set(true);

    if let Some(win) = web_sys::window() {
        let clear = dnd.drag_just_ended;
        let cb = Closure::<dyn FnMut()>::new(move || {
            clear.set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref(),
            CLICK_SUPPRESS_MS,
        );
        cb.forget();
    }
}

fn is_interactive(ev: &web_sys::MouseEvent) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .and_then(|el| el.closest(INTERACTIVE_SELECTOR).ok().flatten())
        .is_some()
}

/// Create mousedown handler for draggable items.
/// Records a pending drag with its start position.
pub fn make_on_mousedown<I, T>(
    dnd: DndSignals<I, T>,
    item: I,
) -> impl Fn(web_sys::MouseEvent) + 'static
where
    I: Clone + PartialEq + Send + Sync + 'static,
    T: Clone + PartialEq + Send + Sync + 'static,
{
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 || is_interactive(&ev) {
            return;
        }
        let start = (ev.client_x(), ev.client_y());
        dnd.phase.update(|p| p.press(item.clone(), start));
    }
}

/// Create mouseenter handler for drop targets
pub fn make_on_target_mouseenter<I, T>(
    dnd: DndSignals<I, T>,
    target: T,
) -> impl Fn(web_sys::MouseEvent) + 'static
where
    I: Clone + PartialEq + Send + Sync + 'static,
    T: Clone + PartialEq + Send + Sync + 'static,
{
    move |_ev: web_sys::MouseEvent| {
        dnd.phase.maybe_update(|p| {
            if !p.is_dragging() || p.target() == Some(&target) {
                return false;
            }
            p.enter(target.clone());
            true
        });
    }
}

/// Create mouseleave handler for drop targets
pub fn make_on_target_mouseleave<I, T>(
    dnd: DndSignals<I, T>,
    target: T,
) -> impl Fn(web_sys::MouseEvent) + 'static
where
    I: Clone + PartialEq + Send + Sync + 'static,
    T: Clone + PartialEq + Send + Sync + 'static,
{
    move |_ev: web_sys::MouseEvent| {
        dnd.phase.maybe_update(|p| {
            if p.target() != Some(&target) {
                return false;
            }
            p.leave(&target);
            true
        });
    }
}

fn listen<F: ?Sized + WasmClosure>(event: &str, closure: Closure<F>) {
    if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
        let _ = doc.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Bind document mousemove: starts the drag once the pointer moved enough
pub fn bind_global_mousemove<I, T>(dnd: DndSignals<I, T>)
where
    I: Clone + PartialEq + Send + Sync + 'static,
    T: Clone + PartialEq + Send + Sync + 'static,
{
    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(
        move |ev: web_sys::MouseEvent| {
            let pos = (ev.client_x(), ev.client_y());
            dnd.phase.maybe_update(|p| p.motion(pos));
        },
    );
    listen("mousemove", on_mousemove);
}

/// Bind document keydown: Escape abandons a live gesture
pub fn bind_escape_cancel<I, T>(dnd: DndSignals<I, T>)
where
    I: Clone + PartialEq + Send + Sync + 'static,
    T: Clone + PartialEq + Send + Sync + 'static,
{
    let on_keydown = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(
        move |ev: web_sys::KeyboardEvent| {
            if ev.key() != "Escape" {
                return;
            }
            let was_dragging = dnd.phase.with_untracked(DragPhase::is_dragging);
            dnd.phase.maybe_update(|p| {
                if matches!(p, DragPhase::Idle) {
                    return false;
                }
                p.cancel();
                true
            });
            if was_dragging {
                end_drag(&dnd);
            }
        },
    );
    listen("keydown", on_keydown);
}

/// Bind global mouseup handler for drop detection.
/// Also binds the mousemove and Escape handlers.
pub fn bind_global_mouseup<I, T, F>(dnd: DndSignals<I, T>, on_drop: F)
where
    I: Clone + PartialEq + Send + Sync + 'static,
    T: Clone + PartialEq + Send + Sync + 'static,
    F: Fn(I, T) + 'static,
{
    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(
        move |_ev: web_sys::MouseEvent| {
            let mut was_dragging = false;
            let mut dropped = None;
            dnd.phase.maybe_update(|p| {
                if matches!(p, DragPhase::Idle) {
                    return false;
                }
                was_dragging = p.is_dragging();
                dropped = p.release();
                true
            });

            // A plain click never sets the guard; its click event fires as usual.
            if was_dragging {
                end_drag(&dnd);
            }
            if let Some((item, target)) = dropped {
                on_drop(item, target);
            }
        },
    );
    listen("mouseup", on_mouseup);

    bind_global_mousemove(dnd);
    bind_escape_cancel(dnd);
}

/// Tracked: is `item` the one being dragged
pub fn is_dragging_item<I, T>(dnd: &DndSignals<I, T>, item: &I) -> bool
where
    I: Clone + PartialEq + Send + Sync + 'static,
    T: Clone + PartialEq + Send + Sync + 'static,
{
    dnd.phase.with(|p| p.dragged() == Some(item))
}

/// Tracked: is `target` under the dragged item
pub fn is_hover_target<I, T>(dnd: &DndSignals<I, T>, target: &T) -> bool
where
    I: Clone + PartialEq + Send + Sync + 'static,
    T: Clone + PartialEq + Send + Sync + 'static,
{
    dnd.phase.with(|p| p.target() == Some(target))
}

/// Tracked: is any drag in progress
pub fn is_active<I, T>(dnd: &DndSignals<I, T>) -> bool
where
    I: Clone + PartialEq + Send + Sync + 'static,
    T: Clone + PartialEq + Send + Sync + 'static,
{
    dnd.phase.with(DragPhase::is_dragging)
}

/// Untracked: should a click on an item be swallowed
pub fn click_suppressed<I, T>(dnd: &DndSignals<I, T>) -> bool
where
    I: Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    dnd.drag_just_ended.get_untracked()
}
