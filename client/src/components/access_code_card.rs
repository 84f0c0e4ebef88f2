//! Access code management card for the admin page.

use leptos::prelude::*;
use model::{AccessMode, Event};

use crate::util::browser;

/// Card showing the event's join link and access code, with copy and
/// regenerate actions. The code starts hidden so an organizer can have the
/// admin page open next to the projection without leaking it.
#[component]
pub fn AccessCodeCard(event: Event, on_regenerated: Callback<String>) -> impl IntoView {
    let revealed = RwSignal::new(false);
    let copied = RwSignal::new(false);

    let event_id = event.id;
    let slug = event.slug.clone();
    let code = event.access_code.clone();
    let protected = matches!(event.access_mode, AccessMode::CodeProtected);

    let join_link = browser::join_url(&browser::origin(), &slug);

    let shown_code = {
        let code = code.clone();
        move || {
            if revealed.get() {
                code.clone()
            } else {
                "••••••".to_owned()
            }
        }
    };

    let on_copy = {
        let join_link = join_link.clone();
        move |_| {
            browser::copy_to_clipboard(&join_link);
            copied.set(true);
        }
    };

    let on_regenerate = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::regenerate_access_code(event_id).await {
                Ok(new_code) => on_regenerated.run(new_code),
                Err(message) => log::warn!("access code rotation failed: {message}"),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (event_id, &on_regenerated);
    };

    view! {
        <div class="access-code-card">
            <h3>"Attendee access"</h3>
            <div class="access-code-card__link-row">
                <span class="access-code-card__link">{join_link.clone()}</span>
                <button class="btn" on:click=on_copy>
                    {move || if copied.get() { "Copied" } else { "Copy link" }}
                </button>
            </div>
            <Show when=move || protected>
                <div class="access-code-card__code-row">
                    <code class="access-code-card__code">{shown_code.clone()}</code>
                    <button class="btn" on:click=move |_| revealed.update(|r| *r = !*r)>
                        {move || if revealed.get() { "Hide" } else { "Show" }}
                    </button>
                    <button class="btn" on:click=on_regenerate>
                        "Regenerate"
                    </button>
                </div>
            </Show>
        </div>
    }
}
