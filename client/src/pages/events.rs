//! Organizer dashboard listing events with create and manage actions.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use model::{CreateEventRequest, Event, UpdateEventRequest};

use crate::state::auth::AuthState;

/// Organizer dashboard. Redirects to `/login` once the auth probe resolves
/// without a session; otherwise lists every event, newest first, with
/// per-event links into the admin and projection surfaces.
#[component]
pub fn EventsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let events = RwSignal::new(Vec::<Event>::new());
    let info = RwSignal::new(String::new());
    let new_name = RwSignal::new(String::new());
    let confirm_delete = RwSignal::new(None::<uuid::Uuid>);

    let navigate_login = navigate.clone();
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.organizer.is_none() {
            navigate_login("/login", NavigateOptions::default());
        }
    });

    let reload = move || {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Some(list) = crate::net::api::fetch_events().await {
                events.set(list);
            }
        });
    };
    reload();

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let name = new_name.get().trim().to_owned();
        if name.is_empty() {
            info.set("Give the event a name.".to_owned());
            return;
        }
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let request = CreateEventRequest {
                name,
                ..CreateEventRequest::default()
            };
            match crate::net::api::create_event(&request).await {
                Ok(_) => {
                    new_name.set(String::new());
                    reload();
                }
                Err(message) => info.set(message),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = name;
    };

    let on_toggle_active = move |event_id: uuid::Uuid, is_active: bool| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let request = UpdateEventRequest {
                is_active: Some(!is_active),
                ..UpdateEventRequest::default()
            };
            match crate::net::api::update_event(event_id, &request).await {
                Ok(_) => reload(),
                Err(message) => info.set(message),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (event_id, is_active);
    };

    let on_delete = move |event_id: uuid::Uuid| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_event(event_id).await {
                Ok(()) => {
                    confirm_delete.set(None);
                    reload();
                }
                Err(message) => info.set(message),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = event_id;
    };

    let navigate_out = navigate.clone();
    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate_out.clone();
            leptos::task::spawn_local(async move {
                crate::net::api::logout().await;
                auth.set(AuthState::resolved(None));
                navigate("/", NavigateOptions::default());
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = &navigate_out;
    };

    view! {
        <div class="events-page">
            <header class="events-page__header">
                <h1>"Your events"</h1>
                <button class="btn" on:click=on_logout>"Sign out"</button>
            </header>

            <form class="events-page__create" on:submit=on_create>
                <input
                    class="events-page__create-input"
                    type="text"
                    placeholder="New event name"
                    prop:value=move || new_name.get()
                    on:input=move |ev| new_name.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit">"Create event"</button>
            </form>

            <Show when=move || !info.get().is_empty()>
                <p class="events-page__message">{move || info.get()}</p>
            </Show>

            <ul class="events-page__list">
                <For
                    each=move || events.get()
                    key=|event| (event.id, event.is_active, event.updated_at.clone())
                    let:event
                >
                    {
                        let event_id = event.id;
                        let is_active = event.is_active;
                        let admin_href = format!("/event/{}/admin", event.slug);
                        let projection_href = format!("/event/{}/projection", event.slug);
                        view! {
                            <li class="event-row" class:event-row--inactive=!is_active>
                                <div class="event-row__body">
                                    <span class="event-row__name">{event.name.clone()}</span>
                                    <span class="event-row__slug">{event.slug.clone()}</span>
                                </div>
                                <div class="event-row__actions">
                                    <a class="btn" href=admin_href>"Admin"</a>
                                    <a class="btn" href=projection_href target="_blank">"Projection"</a>
                                    <button class="btn" on:click=move |_| on_toggle_active(event_id, is_active)>
                                        {if is_active { "Deactivate" } else { "Activate" }}
                                    </button>
                                    <Show
                                        when=move || confirm_delete.get() == Some(event_id)
                                        fallback=move || view! {
                                            <button
                                                class="btn btn--danger"
                                                on:click=move |_| confirm_delete.set(Some(event_id))
                                            >
                                                "Delete"
                                            </button>
                                        }
                                    >
                                        <button class="btn btn--danger" on:click=move |_| on_delete(event_id)>
                                            "Really delete?"
                                        </button>
                                        <button class="btn" on:click=move |_| confirm_delete.set(None)>
                                            "Keep"
                                        </button>
                                    </Show>
                                </div>
                            </li>
                        }
                    }
                </For>
            </ul>
        </div>
    }
}
