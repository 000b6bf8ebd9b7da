//! Account Menu Component
//!
//! Simulated session: magic-link login, guest mode and logout.

use leptos::prelude::*;

use crate::context::use_app;

#[component]
pub fn AccountMenu() -> impl IntoView {
    let ctx = use_app();
    let (open, set_open) = signal(false);
    let (email, set_email) = signal(String::new());

    let user_label = Memo::new(move |_| {
        ctx.state
            .with(|s| s.user.as_ref().map(|u| u.display_name().to_string()))
    });

    let on_login = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let address = email.get();
        if address.trim().is_empty() {
            return;
        }
        ctx.apply(|s| s.login(&address));
        set_email.set(String::new());
        set_open.set(false);
    };

    view! {
        <div class="account-menu">
            {move || match user_label.get() {
                Some(label) => view! {
                    <span class="account-name">{label}</span>
                    <button
                        class="logout-btn"
                        on:click=move |_| ctx.apply(|s| s.logout())
                    >
                        "Log out"
                    </button>
                }.into_any(),
                None => view! {
                    <button class="login-btn" on:click=move |_| set_open.update(|o| *o = !*o)>
                        "Sign in"
                    </button>
                }.into_any(),
            }}

            <Show when=move || open.get() && user_label.with(Option::is_none)>
                <div class="account-popover">
                    <form class="login-form" on:submit=on_login>
                        <input
                            type="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                        <button type="submit">"Send magic link"</button>
                    </form>
                    <button
                        class="guest-btn"
                        on:click=move |_| {
                            ctx.apply(|s| s.continue_as_guest());
                            set_open.set(false);
                        }
                    >
                        "Continue as guest"
                    </button>
                </div>
            </Show>
        </div>
    }
}
