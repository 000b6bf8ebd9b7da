//! Add / Edit Task Dialogs
//!
//! Modal wrappers around `TaskForm`. Each opening starts from a fresh draft.

use leptos::prelude::*;
use now_later_core::TaskDraft;

use crate::components::TaskForm;
use crate::context::use_app;
use crate::store::{store_close_add_dialog, store_close_edit, UiStateStoreFields};

#[component]
fn Dialog(
    #[prop(into)] title: String,
    on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=|ev| ev.stop_propagation()>
                <h2 class="dialog-title">{title}</h2>
                {children()}
            </div>
        </div>
    }
}

#[component]
pub fn AddTaskDialog() -> impl IntoView {
    let ctx = use_app();
    let ui = ctx.ui;

    move || {
        ui.add_dialog_open().get().then(|| {
            let hint = ui.add_hint().get_untracked();
            let draft = RwSignal::new(hint.map(TaskDraft::for_quadrant).unwrap_or_default());
            let close = Callback::new(move |_: ()| store_close_add_dialog(&ui));
            let submit = move |_: ()| {
                ctx.apply(|s| s.add_task(draft.get_untracked()));
                store_close_add_dialog(&ui);
            };

            view! {
                <Dialog title="Add New Task" on_close=close>
                    <TaskForm draft=draft submit_label="Add Task" on_submit=submit on_cancel=close />
                </Dialog>
            }
        })
    }
}

#[component]
pub fn EditTaskDialog() -> impl IntoView {
    let ctx = use_app();
    let ui = ctx.ui;

    move || {
        let task_id = ui.editing_task().get()?;
        let initial = ctx
            .state
            .with_untracked(|s| s.find_task(&task_id).map(TaskDraft::from_task))?;
        let draft = RwSignal::new(initial);
        let close = Callback::new(move |_: ()| store_close_edit(&ui));
        let submit = move |_: ()| {
            ctx.apply(|s| s.edit_task(&task_id, draft.get_untracked()));
            store_close_edit(&ui);
        };

        Some(view! {
            <Dialog title="Edit Task" on_close=close>
                <TaskForm draft=draft submit_label="Save Changes" on_submit=submit on_cancel=close />
            </Dialog>
        })
    }
}
