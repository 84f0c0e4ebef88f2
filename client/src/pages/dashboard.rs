//! Attendee page: access gate, then the message form.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use model::EventSummary;

use crate::components::access_gate::{AccessGate, JoinedAttendee};
use crate::components::message_form::MessageForm;

/// What the attendee sees for one event. The gate collects a name/email and
/// (for protected events) the access code; passing it swaps in the message
/// form. Join state is per page load, matching the session semantics of the
/// rest of the app.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let params = use_params_map();
    let slug = Memo::new(move |_| params.read().get("slug").unwrap_or_default());

    let event = RwSignal::new(None::<EventSummary>);
    let joined = RwSignal::new(None::<JoinedAttendee>);
    let missing = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let slug = slug.get();
        if slug.is_empty() {
            return;
        }
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_event_summary(&slug).await {
                Some(summary) => event.set(Some(summary)),
                None => missing.set(true),
            }
        });
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = slug;

    let on_joined = Callback::new(move |attendee: JoinedAttendee| {
        joined.set(Some(attendee));
    });

    view! {
        <div class="dashboard-page">
            <Show when=move || missing.get()>
                <p class="dashboard-page__missing">
                    "No event lives at this link. Check the address on the screen."
                </p>
            </Show>
            {move || {
                if let Some(attendee) = joined.get() {
                    view! {
                        <MessageForm
                            event=attendee.event
                            author_name=attendee.name
                            author_email=attendee.email
                        />
                    }
                    .into_any()
                } else if let Some(summary) = event.get() {
                    view! { <AccessGate event=summary on_joined/> }.into_any()
                } else {
                    view! { <p class="dashboard-page__loading">"Loading…"</p> }.into_any()
                }
            }}
        </div>
    }
}
