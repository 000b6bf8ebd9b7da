//! Toaster Component
//!
//! Stack of live notices; click to dismiss early.

use leptos::prelude::*;

use crate::store::{store_dismiss_toast, use_ui_store, UiStateStoreFields};

#[component]
pub fn Toaster() -> impl IntoView {
    let ui = use_ui_store();

    view! {
        <div class="toaster">
            <For
                each=move || ui.toasts().get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = if toast.notice.is_error() {
                        "toast error"
                    } else {
                        "toast success"
                    };
                    view! {
                        <div
                            class=class
                            role="status"
                            on:click=move |_| store_dismiss_toast(&ui, id)
                        >
                            {toast.notice.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
