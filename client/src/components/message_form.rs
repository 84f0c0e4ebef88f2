//! Attendee message composer with a live character counter.

#[cfg(test)]
#[path = "message_form_test.rs"]
mod message_form_test;

use leptos::prelude::*;
use model::{EventSummary, MAX_MESSAGE_LEN, SubmitMessageRequest};

/// Characters still available for `content`, counted the way the server
/// counts them (chars, not bytes).
#[must_use]
pub fn chars_left(content: &str) -> i64 {
    MAX_MESSAGE_LEN as i64 - content.chars().count() as i64
}

/// Validate raw textarea content before submission.
///
/// # Errors
///
/// Returns a user-facing message for empty or over-length content.
pub fn validate_content(content: &str) -> Result<String, &'static str> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err("Write something first.");
    }
    if trimmed.chars().count() > MAX_MESSAGE_LEN {
        return Err("Messages are limited to 200 characters.");
    }
    Ok(trimmed.to_owned())
}

/// Message form shown once an attendee has passed the access gate.
/// Submissions land in the moderation queue, so the confirmation copy says
/// so instead of pretending the note is already on the wall.
#[component]
pub fn MessageForm(
    event: EventSummary,
    author_name: Option<String>,
    author_email: Option<String>,
) -> impl IntoView {
    let content = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let submitted = RwSignal::new(false);
    let busy = RwSignal::new(false);

    let event_id = event.id;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let body = match validate_content(&content.get()) {
            Ok(body) => body,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let request = SubmitMessageRequest {
                content: body,
                author_name: author_name.clone(),
                author_email: author_email.clone(),
            };
            leptos::task::spawn_local(async move {
                match crate::net::api::submit_message(event_id, &request).await {
                    Ok(_) => {
                        content.set(String::new());
                        submitted.set(true);
                    }
                    Err(message) => info.set(message),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (body, &author_name, &author_email);
    };

    let counter = move || {
        let left = chars_left(&content.get());
        format!("{left} characters left")
    };

    view! {
        <div class="message-form">
            <h2 class="message-form__title">{event.name.clone()}</h2>
            <Show when=move || submitted.get()>
                <p class="message-form__confirmation">
                    "Thanks! Your message is with the organizers for review."
                </p>
            </Show>
            <form on:submit=on_submit>
                <textarea
                    class="message-form__textarea"
                    placeholder="Share an idea with the room"
                    maxlength=MAX_MESSAGE_LEN.to_string()
                    prop:value=move || content.get()
                    on:input=move |ev| {
                        content.set(event_target_value(&ev));
                        submitted.set(false);
                    }
                />
                <div class="message-form__footer">
                    <span class="message-form__counter">{counter}</span>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Send"
                    </button>
                </div>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="message-form__message">{move || info.get()}</p>
            </Show>
        </div>
    }
}
