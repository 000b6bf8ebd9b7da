//! Delete Confirm Button Component
//!
//! Two-step delete: the first click arms the button, the second commits.

use leptos::prelude::*;

/// Inline delete confirmation
///
/// Idle it renders a single × button. Armed it shows `prompt` next to
/// confirm/cancel buttons; confirming runs `on_confirm` and disarms.
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    /// Question shown while armed, e.g. "Delete task?"
    #[prop(into, default = "Delete?".to_string())]
    prompt: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let armed = RwSignal::new(false);

    // Buttons live inside clickable cards; keep their clicks local.
    let guarded = move |action: fn(RwSignal<bool>)| {
        move |ev: web_sys::MouseEvent| {
            ev.stop_propagation();
            action(armed);
        }
    };
    let confirm = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        armed.set(false);
        on_confirm.run(());
    };

    move || {
        if armed.get() {
            view! {
                <span class="delete-confirm">
                    <span class="delete-confirm-text">{prompt.clone()}</span>
                    <button class="confirm-btn" title="Confirm" on:click=confirm>"✓"</button>
                    <button
                        class="cancel-btn"
                        title="Cancel"
                        on:click=guarded(|armed| armed.set(false))
                    >
                        "✗"
                    </button>
                </span>
            }
            .into_any()
        } else {
            view! {
                <button
                    class=button_class.clone()
                    title="Delete"
                    on:click=guarded(|armed| armed.set(true))
                >
                    "×"
                </button>
            }
            .into_any()
        }
    }
}
