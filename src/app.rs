//! Now & Later Frontend App
//!
//! Loads the persisted board state once, provides context and lays out the
//! navigation, the current view, the dialogs and the toaster.

use leptos::prelude::*;
use leptos_dragdrop::{bind_global_mouseup, create_dnd_signals, is_active};
use now_later_core::{AppConfig, StateRepository};
use reactive_stores::Store;

use crate::components::{
    AddTaskDialog, ArchiveView, EditTaskDialog, EisenhowerMatrix, Toaster, TopNavigation,
};
use crate::context::{AppContext, QuadrantDnd};
use crate::storage::BrowserStore;
use crate::store::{UiState, UiStateStoreFields, View};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let repo = StateRepository::new(BrowserStore, &config);
    let state = RwSignal::new(repo.load());
    let ui = Store::new(UiState::default());

    let ctx = AppContext::new(state, repo, ui, config.toast_duration_ms);
    provide_context(ctx);
    provide_context(ui);

    // Drop a task card on a quadrant panel
    let dnd: QuadrantDnd = create_dnd_signals();
    provide_context(dnd);
    bind_global_mouseup(dnd, move |task_id: String, quadrant| {
        log::debug!("drop {task_id} on {}", quadrant.slug());
        ctx.apply(|s| s.move_task_to_quadrant(&task_id, quadrant));
    });

    // Mirror dark mode onto <html class="dark">
    Effect::new(move |_| {
        let dark = state.with(|s| s.dark_mode);
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element());
        if let Some(root) = root {
            let _ = root.class_list().toggle_with_force("dark", dark);
        }
    });

    let dragging = move || is_active(&dnd);

    view! {
        <div class="app-layout" class=("is-dragging", dragging)>
            <TopNavigation />

            <main class="main-content">
                {move || match ui.view().get() {
                    View::Matrix => view! { <EisenhowerMatrix /> }.into_any(),
                    View::Archive => view! { <ArchiveView /> }.into_any(),
                }}
            </main>

            <AddTaskDialog />
            <EditTaskDialog />
            <Toaster />
        </div>
    }
}
