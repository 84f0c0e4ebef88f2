//! Organizer sign-in and registration page.

use leptos::prelude::*;

use crate::state::auth::AuthState;

/// Login page — one card that flips between sign-in and create-account
/// modes. On success the organizer lands on `/events`.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let registering = RwSignal::new(false);
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = email.get().trim().to_owned();
        let password_value = password.get();
        if email_value.is_empty() || password_value.is_empty() {
            info.set("Enter both email and password.".to_owned());
            return;
        }
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            let name_value = name.get().trim().to_owned();
            let is_register = registering.get();
            leptos::task::spawn_local(async move {
                let result = if is_register {
                    crate::net::api::register(&email_value, &password_value, &name_value).await
                } else {
                    crate::net::api::login(&email_value, &password_value).await
                };
                match result {
                    Ok(organizer) => {
                        auth.set(AuthState::resolved(Some(organizer)));
                        navigate("/events", leptos_router::NavigateOptions::default());
                    }
                    Err(message) => {
                        info.set(message);
                        busy.set(false);
                    }
                }
            });
        }
    };

    let toggle_mode = move |_| {
        registering.update(|r| *r = !*r);
        info.set(String::new());
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Stickyboard"</h1>
                <p class="login-card__subtitle">
                    {move || if registering.get() { "Create an organizer account" } else { "Organizer sign in" }}
                </p>
                <form class="login-form" on:submit=on_submit>
                    <Show when=move || registering.get()>
                        <input
                            class="login-input"
                            type="text"
                            placeholder="Your name"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </Show>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if registering.get() { "Create account" } else { "Sign in" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <button class="login-card__toggle" on:click=toggle_mode>
                    {move || {
                        if registering.get() {
                            "Already have an account? Sign in"
                        } else {
                            "New here? Create an account"
                        }
                    }}
                </button>
            </div>
        </div>
    }
}
