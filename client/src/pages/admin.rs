//! Organizer admin page: moderation queue, settings, access, export.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};
use model::{AccessAttempt, Event, Message, MessageStatus, StoredSettings, WorkshopUser};
use uuid::Uuid;

use crate::components::access_code_card::AccessCodeCard;
use crate::components::export_buttons::ExportButtons;
use crate::components::moderation_list::ModerationList;
use crate::components::qr_image::QrImage;
use crate::components::settings_editor::SettingsEditor;
use crate::state::auth::AuthState;

/// The admin surface is slug-addressed but the API is id-addressed for
/// organizer operations, so the page resolves the slug against the
/// organizer's event list.
#[must_use]
pub fn find_event_by_slug(events: &[Event], slug: &str) -> Option<Event> {
    events.iter().find(|event| event.slug == slug).cloned()
}

/// Label for a status tab, with its tally.
#[must_use]
pub fn tab_label(name: &str, count: i64) -> String {
    format!("{name} ({count})")
}

/// Moderation and configuration for one event. Requires an organizer
/// session; the message list lives on a status tab and refetches after
/// every moderation action so the tallies stay honest.
#[component]
pub fn AdminPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let params = use_params_map();
    let slug = Memo::new(move |_| params.read().get("slug").unwrap_or_default());
    let navigate = use_navigate();

    let event = RwSignal::new(None::<Event>);
    let messages = RwSignal::new(Vec::<Message>::new());
    let counts = RwSignal::new(model::StatusCounts::default());
    let tab = RwSignal::new(MessageStatus::Pending);
    let settings = RwSignal::new(None::<StoredSettings>);
    let attempts = RwSignal::new(Vec::<AccessAttempt>::new());
    let attendees = RwSignal::new(Vec::<WorkshopUser>::new());

    let navigate_login = navigate.clone();
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.organizer.is_none() {
            navigate_login("/login", NavigateOptions::default());
        }
    });

    // Resolve the slug to the full event row (access code included).
    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let slug = slug.get();
        if slug.is_empty() {
            return;
        }
        leptos::task::spawn_local(async move {
            if let Some(list) = crate::net::api::fetch_events().await {
                event.set(find_event_by_slug(&list, &slug));
            }
        });
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = slug;

    let reload_messages = move |event_id: Uuid, status: MessageStatus| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Some(response) =
                crate::net::api::fetch_messages(event_id, Some(status.as_str())).await
            {
                messages.set(response.messages);
                counts.set(response.counts);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (event_id, status);
    };

    // First load per resolved event: messages for the current tab, settings,
    // attempt log, roster.
    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let Some(current) = event.get() else {
            return;
        };
        let event_id = current.id;
        reload_messages(event_id, tab.get_untracked());
        leptos::task::spawn_local(async move {
            settings.set(Some(
                crate::net::api::fetch_settings(event_id).await.unwrap_or_default(),
            ));
            if let Some(log) = crate::net::api::fetch_attempts(event_id).await {
                attempts.set(log);
            }
            if let Some(roster) = crate::net::api::fetch_attendees(event_id).await {
                attendees.set(roster);
            }
        });
    });

    let on_moderate = Callback::new(move |(message_id, status): (Uuid, MessageStatus)| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::moderate_message(message_id, status).await {
                Ok(_) => {
                    if let Some(current) = event.get_untracked() {
                        reload_messages(current.id, tab.get_untracked());
                    }
                }
                Err(message) => log::warn!("moderation failed: {message}"),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (message_id, status);
    });

    let on_delete = Callback::new(move |message_id: Uuid| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_message(message_id).await {
                Ok(()) => {
                    if let Some(current) = event.get_untracked() {
                        reload_messages(current.id, tab.get_untracked());
                    }
                }
                Err(message) => log::warn!("delete failed: {message}"),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = message_id;
    });

    let on_regenerated = Callback::new(move |new_code: String| {
        event.update(|current| {
            if let Some(current) = current {
                current.access_code = new_code;
            }
        });
    });

    let select_tab = move |status: MessageStatus| {
        tab.set(status);
        if let Some(current) = event.get_untracked() {
            reload_messages(current.id, status);
        }
    };

    let tab_button = move |status: MessageStatus, label: &'static str| {
        let count = move || match status {
            MessageStatus::Pending => counts.get().pending,
            MessageStatus::Approved => counts.get().approved,
            MessageStatus::Rejected => counts.get().rejected,
        };
        view! {
            <button
                class="admin-tabs__tab"
                class:admin-tabs__tab--active=move || tab.get() == status
                on:click=move |_| select_tab(status)
            >
                {move || tab_label(label, count())}
            </button>
        }
    };

    view! {
        <div class="admin-page">
            {move || {
                let Some(current) = event.get() else {
                    return view! { <p class="admin-page__loading">"Loading…"</p> }.into_any();
                };
                let projection_href = format!("/event/{}/projection", current.slug);
                let current_settings = settings.get().unwrap_or_default();
                view! {
                    <header class="admin-page__header">
                        <h1>{current.name.clone()}</h1>
                        <div class="admin-page__header-links">
                            <a class="btn" href="/events">"All events"</a>
                            <a class="btn" href=projection_href target="_blank">"Open projection"</a>
                        </div>
                    </header>

                    <section class="admin-page__moderation">
                        <nav class="admin-tabs">
                            {tab_button(MessageStatus::Pending, "Pending")}
                            {tab_button(MessageStatus::Approved, "Approved")}
                            {tab_button(MessageStatus::Rejected, "Rejected")}
                        </nav>
                        <ModerationList
                            messages=messages.into()
                            on_moderate
                            on_delete
                        />
                    </section>

                    <aside class="admin-page__side">
                        <AccessCodeCard event=current.clone() on_regenerated/>
                        <QrImage slug=current.slug.clone()/>
                        <SettingsEditor event_id=current.id initial=current_settings/>
                        <ExportButtons event_id=current.id/>

                        <section class="admin-page__roster">
                            <h3>{move || format!("Attendees ({})", attendees.get().len())}</h3>
                            <ul>
                                <For
                                    each=move || attendees.get()
                                    key=|user| user.id
                                    let:user
                                >
                                    <li class="admin-page__roster-row">
                                        {user.name.clone()}
                                        {user.email.clone().map(|email| format!(" · {email}"))}
                                    </li>
                                </For>
                            </ul>
                        </section>

                        <section class="admin-page__attempts">
                            <h3>"Join attempts"</h3>
                            <ul>
                                <For
                                    each=move || attempts.get()
                                    key=|attempt| attempt.id
                                    let:attempt
                                >
                                    <li
                                        class="admin-page__attempt-row"
                                        class:admin-page__attempt-row--failed=!attempt.success
                                    >
                                        {attempt.attempted_code.clone()}
                                        " · "
                                        {if attempt.success { "ok" } else { "failed" }}
                                        " · "
                                        {attempt.created_at.clone()}
                                    </li>
                                </For>
                            </ul>
                        </section>
                    </aside>
                }
                .into_any()
            }}
        </div>
    }
}
