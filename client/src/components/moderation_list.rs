//! Moderation queue rows with approve / reject / delete actions.

use leptos::prelude::*;
use model::{Message, MessageStatus};
use uuid::Uuid;

/// One row in the moderation list.
#[component]
fn ModerationRow(
    message: Message,
    on_moderate: Callback<(Uuid, MessageStatus)>,
    on_delete: Callback<Uuid>,
) -> impl IntoView {
    let id = message.id;
    let status = message.status;
    let author = message
        .author_name
        .clone()
        .unwrap_or_else(|| "Anonymous".to_owned());

    view! {
        <li class="moderation-row">
            <div class="moderation-row__body">
                <p class="moderation-row__content">{message.content.clone()}</p>
                <span class="moderation-row__meta">
                    {author} " · " {message.created_at.clone()}
                </span>
            </div>
            <div class="moderation-row__actions">
                <Show when=move || status != MessageStatus::Approved>
                    <button
                        class="btn btn--approve"
                        on:click=move |_| on_moderate.run((id, MessageStatus::Approved))
                    >
                        "Approve"
                    </button>
                </Show>
                <Show when=move || status != MessageStatus::Rejected>
                    <button
                        class="btn btn--reject"
                        on:click=move |_| on_moderate.run((id, MessageStatus::Rejected))
                    >
                        "Reject"
                    </button>
                </Show>
                <button class="btn btn--danger" on:click=move |_| on_delete.run(id)>
                    "Delete"
                </button>
            </div>
        </li>
    }
}

/// The moderation queue for one status tab. Pure view over the messages the
/// admin page fetched; every action is delegated back up so the page can
/// refetch after the server confirms.
#[component]
pub fn ModerationList(
    messages: Signal<Vec<Message>>,
    on_moderate: Callback<(Uuid, MessageStatus)>,
    on_delete: Callback<Uuid>,
) -> impl IntoView {
    view! {
        <Show
            when=move || !messages.get().is_empty()
            fallback=|| view! { <p class="moderation-list__empty">"Nothing here."</p> }
        >
            <ul class="moderation-list">
                <For
                    each=move || messages.get()
                    key=|message| (message.id, message.status)
                    let:message
                >
                    <ModerationRow message on_moderate on_delete/>
                </For>
            </ul>
        </Show>
    }
}
