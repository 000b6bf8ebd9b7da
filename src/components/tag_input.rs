//! Tag Input Component
//!
//! Chips for the draft's tags plus a text field; Enter adds, × removes.

use leptos::prelude::*;
use now_later_core::domain::tag_color_index;
use now_later_core::TaskDraft;

#[component]
pub fn TagInput(draft: RwSignal<TaskDraft>) -> impl IntoView {
    let (text, set_text) = signal(String::new());

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() != "Enter" {
            return;
        }
        // keep Enter from submitting the surrounding form
        ev.prevent_default();
        let raw = text.get();
        draft.update(|d| {
            d.add_tag(&raw);
        });
        set_text.set(String::new());
    };

    view! {
        <div class="tag-input">
            <div class="tag-chips">
                <For
                    each=move || draft.with(|d| d.tags.clone())
                    key=|tag| tag.clone()
                    children=move |tag| {
                        let class = format!("tag tag-color-{}", tag_color_index(&tag));
                        let removed = tag.clone();
                        view! {
                            <span class=class>
                                {tag}
                                <button
                                    type="button"
                                    class="tag-remove-btn"
                                    on:click=move |_| draft.update(|d| d.remove_tag(&removed))
                                >
                                    "×"
                                </button>
                            </span>
                        }
                    }
                />
            </div>
            <input
                type="text"
                placeholder="Add tag and press Enter"
                prop:value=move || text.get()
                on:input=move |ev| set_text.set(event_target_value(&ev))
                on:keydown=on_keydown
            />
        </div>
    }
}
