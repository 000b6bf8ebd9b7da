//! Eisenhower Matrix Component
//!
//! Four quadrant panels in a 2×2 grid. Each panel is a drop target for
//! task cards.

use leptos::prelude::*;
use leptos_dragdrop::{is_hover_target, make_on_target_mouseenter, make_on_target_mouseleave};
use now_later_core::Quadrant;

use crate::components::TaskCard;
use crate::context::{use_app, use_quadrant_dnd};
use crate::store::store_open_add_dialog;

#[component]
pub fn EisenhowerMatrix() -> impl IntoView {
    let ctx = use_app();
    let has_board = Memo::new(move |_| ctx.state.with(|s| s.current_board().is_some()));

    view! {
        <Show
            when=move || has_board.get()
            fallback=|| view! { <p class="empty-state">"Create a board to get started"</p> }
        >
            <div class="matrix">
                {Quadrant::ALL
                    .into_iter()
                    .map(|quadrant| view! { <QuadrantPanel quadrant=quadrant /> })
                    .collect_view()}
            </div>
        </Show>
    }
}

/// One quadrant with its active tasks in board order
#[component]
fn QuadrantPanel(quadrant: Quadrant) -> impl IntoView {
    let ctx = use_app();
    let dnd = use_quadrant_dnd();

    let task_ids = Memo::new(move |_| {
        ctx.state.with(|s| {
            s.partition()
                .get(quadrant)
                .iter()
                .map(|t| t.id.clone())
                .collect::<Vec<_>>()
        })
    });

    let panel_class = move || {
        let mut class = format!("quadrant quadrant-{}", quadrant.slug());
        if is_hover_target(&dnd, &quadrant) {
            class.push_str(" drop-target");
        }
        class
    };

    view! {
        <section
            class=panel_class
            on:mouseenter=make_on_target_mouseenter(dnd, quadrant)
            on:mouseleave=make_on_target_mouseleave(dnd, quadrant)
        >
            <header class="quadrant-header">
                <div>
                    <h2 class="quadrant-title">{quadrant.title()}</h2>
                    <p class="quadrant-subtitle">{quadrant.subtitle()}</p>
                </div>
                <span class="quadrant-count">{move || task_ids.with(Vec::len)}</span>
                <button
                    class="quadrant-add-btn"
                    title="Add task here"
                    on:click=move |_| store_open_add_dialog(&ctx.ui, Some(quadrant))
                >
                    "+"
                </button>
            </header>

            <div class="task-list">
                <Show
                    when=move || task_ids.with(|ids| !ids.is_empty())
                    fallback=|| view! { <p class="quadrant-empty">"No tasks in this quadrant"</p> }
                >
                    <For
                        each=move || task_ids.get()
                        key=|id| id.clone()
                        children=move |id| view! { <TaskCard task_id=id /> }
                    />
                </Show>
            </div>
        </section>
    }
}
