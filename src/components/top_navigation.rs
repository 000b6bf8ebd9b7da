//! Top Navigation Component
//!
//! Title, board tabs, view switch, add button, theme toggle and account.

use leptos::prelude::*;

use crate::components::{AccountMenu, BoardTabBar};
use crate::context::use_app;
use crate::store::{store_open_add_dialog, UiStateStoreFields, View};

#[component]
pub fn TopNavigation() -> impl IntoView {
    let ctx = use_app();
    let ui = ctx.ui;

    let archived_count = Memo::new(move |_| ctx.state.with(|s| s.archived_tasks().len()));
    let dark = Memo::new(move |_| ctx.state.with(|s| s.dark_mode));

    let view_btn = move |target: View, label: &'static str| {
        let class = move || {
            if ui.view().get() == target { "view-btn active" } else { "view-btn" }
        };
        view! {
            <button class=class on:click=move |_| ui.view().set(target)>
                {label}
                {(target == View::Archive).then(|| view! {
                    <span class="badge">{move || archived_count.get()}</span>
                })}
            </button>
        }
    };

    view! {
        <header class="top-nav">
            <h1 class="app-title">"Now & Later"</h1>

            <BoardTabBar />

            <nav class="view-switch">
                {view_btn(View::Matrix, "Matrix")}
                {view_btn(View::Archive, "Archive")}
            </nav>

            <div class="nav-actions">
                <button class="add-task-btn" on:click=move |_| store_open_add_dialog(&ui, None)>
                    "+ Add Task"
                </button>
                <button
                    class="theme-toggle"
                    title=move || if dark.get() { "Light mode" } else { "Dark mode" }
                    on:click=move |_| ctx.apply(|s| s.toggle_dark_mode())
                >
                    {move || if dark.get() { "☀" } else { "☾" }}
                </button>
                <AccountMenu />
            </div>
        </header>
    }
}
