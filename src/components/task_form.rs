//! Task Form Component
//!
//! Fields shared by the add and edit dialogs, bound to a `TaskDraft`.

use leptos::prelude::*;
use now_later_core::domain::parse_due_date;
use now_later_core::TaskDraft;

use crate::components::TagInput;

#[component]
pub fn TaskForm(
    draft: RwSignal<TaskDraft>,
    #[prop(into)] submit_label: String,
    #[prop(into)] on_submit: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let submittable = move || draft.with(TaskDraft::is_submittable);

    let on_form_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submittable() {
            on_submit.run(());
        }
    };

    view! {
        <form class="task-form" on:submit=on_form_submit>
            <label class="field">
                <span>"Title"</span>
                <input
                    type="text"
                    placeholder="What needs to be done?"
                    prop:value=move || draft.with(|d| d.title.clone())
                    on:input=move |ev| draft.update(|d| d.title = event_target_value(&ev))
                />
            </label>

            <label class="field">
                <span>"Description"</span>
                <textarea
                    rows="3"
                    placeholder="Optional details"
                    prop:value=move || draft.with(|d| d.description.clone())
                    on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                ></textarea>
            </label>

            <label class="field">
                <span>"Due date"</span>
                <input
                    type="date"
                    prop:value=move || {
                        draft.with(|d| d.due_date.map(|date| date.format("%Y-%m-%d").to_string()))
                            .unwrap_or_default()
                    }
                    on:input=move |ev| {
                        let date = parse_due_date(&event_target_value(&ev));
                        draft.update(|d| d.due_date = date);
                    }
                />
            </label>

            <div class="flag-row">
                <label class="checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || draft.with(|d| d.urgent)
                        on:change=move |ev| draft.update(|d| d.urgent = event_target_checked(&ev))
                    />
                    "Urgent"
                </label>
                <label class="checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || draft.with(|d| d.important)
                        on:change=move |ev| draft.update(|d| d.important = event_target_checked(&ev))
                    />
                    "Important"
                </label>
                <span class="quadrant-preview">
                    {move || format!("→ {}", draft.with(TaskDraft::quadrant))}
                </span>
            </div>

            <div class="field">
                <span>"Tags"</span>
                <TagInput draft=draft />
            </div>

            <div class="form-actions">
                <button type="button" class="cancel-btn" on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
                <button type="submit" class="primary-btn" disabled=move || !submittable()>
                    {submit_label}
                </button>
            </div>
        </form>
    }
}
