//! Task Card Component
//!
//! A draggable card: checkbox, title, actions, metadata and, when expanded,
//! description and subtasks. Archived cards add a Restore button and are
//! not draggable.

use leptos::prelude::*;
use leptos_dragdrop::{click_suppressed, is_dragging_item, make_on_mousedown};
use now_later_core::domain::{due_label, tag_color_index};
use now_later_core::{Subtask, Task};

use crate::components::DeleteConfirmButton;
use crate::context::{use_app, use_quadrant_dnd};
use crate::store::store_edit_task;

#[component]
pub fn TaskCard(
    task_id: String,
    /// Rendered inside the archive
    #[prop(optional)]
    archived: bool,
) -> impl IntoView {
    let ctx = use_app();
    let dnd = use_quadrant_dnd();
    let (expanded, set_expanded) = signal(false);

    let id = StoredValue::new(task_id);
    let task = Memo::new(move |_| {
        id.with_value(|id| ctx.state.with(|s| s.find_task(id).cloned()))
    });

    let dragging_self = move || is_dragging_item(&dnd, &id.get_value());
    let card_class = move || {
        let mut class = String::from("task-card");
        if task.with(|t| t.as_ref().is_some_and(|t| t.completed)) {
            class.push_str(" completed");
        }
        if dragging_self() {
            class.push_str(" dragging");
        }
        class
    };

    let on_card_click = move |_: web_sys::MouseEvent| {
        // the mouseup of a drag is followed by a click on the card
        if click_suppressed(&dnd) {
            return;
        }
        set_expanded.update(|e| *e = !*e);
    };

    move || {
        task.get().map(|t| {
            let tid = t.id.clone();
            let description = t.description.clone();
            let subtasks = t.subtasks.clone();
            view! {
                <div
                    class=card_class
                    on:mousedown=move |ev| {
                        if !archived {
                            make_on_mousedown(dnd, id.get_value())(ev);
                        }
                    }
                    on:click=on_card_click
                >
                    <div class="task-card-header">
                        <input
                            type="checkbox"
                            prop:checked=t.completed
                            on:click=|ev| ev.stop_propagation()
                            on:change=move |_| id.with_value(|id| ctx.apply(|s| s.toggle_task(id)))
                        />
                        <span class="task-title">{t.title.clone()}</span>
                        <div class="task-actions">
                            {archived.then(|| view! {
                                <button
                                    class="restore-btn"
                                    on:click=move |ev| {
                                        ev.stop_propagation();
                                        id.with_value(|id| ctx.apply(|s| s.restore_task(id)));
                                    }
                                >
                                    "Restore"
                                </button>
                            })}
                            <button
                                class="icon-btn edit-btn"
                                title="Edit"
                                on:click=move |ev| {
                                    ev.stop_propagation();
                                    store_edit_task(&ctx.ui, tid.clone());
                                }
                            >
                                "✎"
                            </button>
                            <DeleteConfirmButton
                                button_class="icon-btn delete-btn"
                                prompt="Delete task?"
                                on_confirm=move |_: ()| {
                                    id.with_value(|id| ctx.apply(|s| s.delete_task(id)))
                                }
                            />
                        </div>
                    </div>

                    <TaskMeta task=t.clone() />

                    <Show when=move || expanded.get()>
                        <div class="task-details" on:click=|ev| ev.stop_propagation()>
                            {description.clone().map(|d| view! { <p class="task-description">{d}</p> })}
                            <SubtaskList task_id=id.get_value() subtasks=subtasks.clone() />
                        </div>
                    </Show>
                </div>
            }
        })
    }
}

/// Due date, tags and subtask progress
#[component]
fn TaskMeta(task: Task) -> impl IntoView {
    let (done, total) = task.subtask_progress();
    let has_meta = task.due_date.is_some() || !task.tags.is_empty() || total > 0;

    has_meta.then(|| view! {
        <div class="task-meta">
            {task.due_date.map(|d| view! { <span class="due-date">"📅 " {due_label(d)}</span> })}
            {task.tags.into_iter().map(|tag| {
                let class = format!("tag tag-color-{}", tag_color_index(&tag));
                view! { <span class=class>{tag}</span> }
            }).collect_view()}
            {(total > 0).then(|| view! {
                <span class="subtask-progress">{format!("{done}/{total}")}</span>
            })}
        </div>
    })
}

/// Checklist of a task with an inline add field
#[component]
fn SubtaskList(task_id: String, subtasks: Vec<Subtask>) -> impl IntoView {
    let ctx = use_app();
    let task_id = StoredValue::new(task_id);
    let (new_title, set_new_title) = signal(String::new());

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() != "Enter" {
            return;
        }
        ev.prevent_default();
        let title = new_title.get();
        task_id.with_value(|id| ctx.apply(|s| s.add_subtask(id, &title)));
        set_new_title.set(String::new());
    };

    view! {
        <ul class="subtask-list">
            {subtasks.into_iter().map(|sub| {
                let sub_id = StoredValue::new(sub.id.clone());
                let li_class = if sub.completed { "subtask completed" } else { "subtask" };
                view! {
                    <li class=li_class>
                        <input
                            type="checkbox"
                            prop:checked=sub.completed
                            on:change=move |_| {
                                task_id.with_value(|tid| sub_id.with_value(|sid| {
                                    ctx.apply(|s| s.toggle_subtask(tid, sid))
                                }))
                            }
                        />
                        <span class="subtask-title">{sub.title}</span>
                        <button
                            class="icon-btn subtask-delete-btn"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                task_id.with_value(|tid| sub_id.with_value(|sid| {
                                    ctx.apply(|s| s.delete_subtask(tid, sid))
                                }))
                            }
                        >
                            "×"
                        </button>
                    </li>
                }
            }).collect_view()}
        </ul>
        <input
            class="subtask-input"
            type="text"
            placeholder="Add subtask and press Enter"
            prop:value=move || new_title.get()
            on:input=move |ev| set_new_title.set(event_target_value(&ev))
            on:keydown=on_keydown
        />
    }
}
