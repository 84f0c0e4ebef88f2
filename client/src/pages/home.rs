//! Landing page with the join-an-event form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

/// Landing page — attendees type the event slug from the projection screen
/// or scan the QR code; organizers follow the sign-in link.
#[component]
pub fn HomePage() -> impl IntoView {
    let slug = RwSignal::new(String::new());
    let navigate = use_navigate();

    let on_join = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let value = slug.get().trim().to_lowercase();
        if value.is_empty() {
            return;
        }
        navigate(&format!("/event/{value}/dashboard"), NavigateOptions::default());
    };

    view! {
        <div class="home-page">
            <div class="home-hero">
                <h1>"Stickyboard"</h1>
                <p class="home-hero__subtitle">
                    "Share ideas from your seat. Watch them land on the wall."
                </p>
                <form class="join-form" on:submit=on_join>
                    <input
                        class="join-form__input"
                        type="text"
                        placeholder="event name, e.g. retro-week"
                        prop:value=move || slug.get()
                        on:input=move |ev| slug.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit">
                        "Join event"
                    </button>
                </form>
                <a class="home-hero__organizer-link" href="/login">
                    "Organizer sign in"
                </a>
            </div>
        </div>
    }
}
