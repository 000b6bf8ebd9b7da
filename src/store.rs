//! UI State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity over view-only
//! state: which screen is shown, open dialogs and live toasts. Board data
//! itself lives in `AppContext::state`.

use leptos::prelude::*;
use now_later_core::{Notice, Quadrant};
use reactive_stores::Store;

/// Main screen
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Matrix,
    Archive,
}

/// A notice on screen
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub notice: Notice,
}

#[derive(Clone, Debug, Default, Store)]
pub struct UiState {
    pub view: View,
    pub add_dialog_open: bool,
    /// Quadrant whose "+" opened the add dialog
    pub add_hint: Option<Quadrant>,
    /// Task shown in the edit dialog
    pub editing_task: Option<String>,
    pub toasts: Vec<Toast>,
    pub next_toast_id: u32,
}

/// Type alias for the store
pub type UiStore = Store<UiState>;

/// Get the UI store from context
pub fn use_ui_store() -> UiStore {
    expect_context::<UiStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_open_add_dialog(store: &UiStore, hint: Option<Quadrant>) {
    store.add_hint().set(hint);
    store.add_dialog_open().set(true);
}

pub fn store_close_add_dialog(store: &UiStore) {
    store.add_dialog_open().set(false);
    store.add_hint().set(None);
}

pub fn store_edit_task(store: &UiStore, task_id: String) {
    store.editing_task().set(Some(task_id));
}

pub fn store_close_edit(store: &UiStore) {
    store.editing_task().set(None);
}

/// Push a toast and return its id
pub fn store_push_toast(store: &UiStore, notice: Notice) -> u32 {
    let id = store.next_toast_id().get_untracked();
    store.next_toast_id().set(id.wrapping_add(1));
    store.toasts().write().push(Toast { id, notice });
    id
}

/// Remove a toast by ID; unknown ids are ignored
pub fn store_dismiss_toast(store: &UiStore, toast_id: u32) {
    store.toasts().write().retain(|t| t.id != toast_id);
}
