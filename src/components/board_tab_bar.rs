//! Board Tab Bar Component
//!
//! Tab bar for switching between boards, with an inline form for new ones.

use leptos::prelude::*;

use crate::context::use_app;

/// Board Tab Bar component
#[component]
pub fn BoardTabBar() -> impl IntoView {
    let ctx = use_app();
    let (adding, set_adding) = signal(false);
    let (new_name, set_new_name) = signal(String::new());

    let boards = Memo::new(move |_| {
        ctx.state.with(|s| {
            s.boards
                .iter()
                .map(|b| (b.id.clone(), b.name.clone()))
                .collect::<Vec<_>>()
        })
    });
    let current_id = Memo::new(move |_| {
        ctx.state.with(|s| s.current_board().map(|b| b.id.clone()))
    });

    let on_add = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = new_name.get();
        if name.trim().is_empty() {
            return;
        }
        ctx.apply(|s| s.create_board(&name));
        set_new_name.set(String::new());
        set_adding.set(false);
    };

    view! {
        <div class="board-tab-bar">
            <For
                each=move || boards.get()
                key=|(id, name)| (id.clone(), name.clone())
                children=move |(id, name)| {
                    let tab_id = id.clone();
                    let is_active = move || {
                        current_id.with(|c| c.as_deref() == Some(tab_id.as_str()))
                    };
                    let tab_class = move || {
                        if is_active() { "board-tab active" } else { "board-tab" }
                    };

                    view! {
                        <button
                            class=tab_class
                            on:click=move |_| ctx.apply(|s| s.switch_board(&id))
                        >
                            {name}
                        </button>
                    }
                }
            />

            {move || if adding.get() {
                view! {
                    <form class="board-add-form" on:submit=on_add>
                        <input
                            type="text"
                            placeholder="Board name"
                            prop:value=move || new_name.get()
                            on:input=move |ev| set_new_name.set(event_target_value(&ev))
                        />
                        <button type="submit">"+"</button>
                        <button type="button" on:click=move |_| set_adding.set(false)>"×"</button>
                    </form>
                }.into_any()
            } else {
                view! {
                    <button
                        class="board-add-btn"
                        title="New board"
                        on:click=move |_| set_adding.set(true)
                    >
                        "+"
                    </button>
                }.into_any()
            }}
        </div>
    }
}
