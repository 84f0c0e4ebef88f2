//! Attendee access gate shown before the message form.

#[cfg(test)]
#[path = "access_gate_test.rs"]
mod access_gate_test;

use leptos::prelude::*;
use model::{AccessMode, EventSummary, JoinEventRequest};

/// Everything the message form needs once the gate has been passed.
#[derive(Clone, Debug, PartialEq)]
pub struct JoinedAttendee {
    pub event: EventSummary,
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Access codes are stored uppercase; attendees type them however they like.
#[must_use]
pub fn normalize_code_input(code: &str) -> String {
    code.trim().to_uppercase()
}

/// Build the join request from the gate's raw field values. Blank optional
/// fields are dropped so the server never stores empty strings.
#[must_use]
pub fn build_join_request(mode: AccessMode, name: &str, email: &str, code: &str) -> JoinEventRequest {
    let non_blank = |s: &str| {
        let s = s.trim();
        (!s.is_empty()).then(|| s.to_owned())
    };
    JoinEventRequest {
        access_code: match mode {
            AccessMode::Open => None,
            AccessMode::CodeProtected => Some(normalize_code_input(code)),
        },
        name: non_blank(name),
        email: non_blank(email),
    }
}

/// Gate card asking for a name, an optional email, and (for code-protected
/// events) the access code. Calls `on_joined` with the event summary the
/// server returns on success, plus the identity the attendee typed.
#[component]
pub fn AccessGate(event: EventSummary, on_joined: Callback<JoinedAttendee>) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let code = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let mode = event.access_mode;
    let slug = event.slug.clone();
    let needs_code = matches!(mode, AccessMode::CodeProtected);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        if needs_code && normalize_code_input(&code.get()).is_empty() {
            info.set("Enter the access code from the screen.".to_owned());
            return;
        }
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let slug = slug.clone();
            let request = build_join_request(mode, &name.get(), &email.get(), &code.get());
            leptos::task::spawn_local(async move {
                match crate::net::api::join_event(&slug, &request).await {
                    Ok(summary) => on_joined.run(JoinedAttendee {
                        event: summary,
                        name: request.name.clone(),
                        email: request.email.clone(),
                    }),
                    Err(message) => {
                        info.set(message);
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&slug, &on_joined);
    };

    view! {
        <div class="access-gate">
            <h2 class="access-gate__title">{event.name.clone()}</h2>
            <Show when={
                let description = event.description.clone();
                move || description.is_some()
            }>
                <p class="access-gate__description">
                    {event.description.clone().unwrap_or_default()}
                </p>
            </Show>
            <form class="access-gate__form" on:submit=on_submit>
                <input
                    class="access-gate__input"
                    type="text"
                    placeholder="Your name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <input
                    class="access-gate__input"
                    type="email"
                    placeholder="Email (optional)"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <Show when=move || needs_code>
                    <input
                        class="access-gate__input access-gate__input--code"
                        type="text"
                        placeholder="Access code"
                        maxlength="6"
                        prop:value=move || code.get()
                        on:input=move |ev| code.set(event_target_value(&ev))
                    />
                </Show>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Join"
                </button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="access-gate__message">{move || info.get()}</p>
            </Show>
        </div>
    }
}
