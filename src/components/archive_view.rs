//! Archive View Component
//!
//! Completed tasks of the current board, with restore and clear actions.

use leptos::prelude::*;

use crate::components::TaskCard;
use crate::context::use_app;

#[component]
pub fn ArchiveView() -> impl IntoView {
    let ctx = use_app();

    let archived_ids = Memo::new(move |_| {
        ctx.state.with(|s| {
            s.archived_tasks()
                .iter()
                .map(|t| t.id.clone())
                .collect::<Vec<_>>()
        })
    });
    let count_label = move || match archived_ids.with(Vec::len) {
        1 => "1 completed task".to_string(),
        n => format!("{n} completed tasks"),
    };

    view! {
        <div class="archive-view">
            <header class="archive-header">
                <div>
                    <h2>"Archive"</h2>
                    <p class="archive-count">{count_label}</p>
                </div>
                <Show when=move || archived_ids.with(|ids| !ids.is_empty())>
                    <button
                        class="clear-archive-btn"
                        on:click=move |_| ctx.apply(|s| s.clear_archive())
                    >
                        "Clear Archive"
                    </button>
                </Show>
            </header>

            <Show
                when=move || archived_ids.with(|ids| !ids.is_empty())
                fallback=|| view! { <p class="empty-state">"No completed tasks yet"</p> }
            >
                <div class="archive-list">
                    <For
                        each=move || archived_ids.get()
                        key=|id| id.clone()
                        children=move |id| view! { <TaskCard task_id=id archived=true /> }
                    />
                </div>
            </Show>
        </div>
    }
}
