//! Full-screen projection display of approved messages.
//!
//! DESIGN
//! ======
//! Two background loops drive the board: a poll loop refetching approved
//! messages and settings every few seconds, and a reveal loop moving one
//! queued message onto the board per tick. Both are gated by one
//! [`SessionHandle`]: `on_cleanup` stops it, and a slug change bumps its
//! generation so loops bound to the previous event wind down instead of
//! writing stale data. All reconcile/layout/color decisions live in the
//! `projection` crate; this page only owns timers and rendering.

#[cfg(test)]
#[path = "projection_page_test.rs"]
mod projection_page_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use model::{EventSummary, ProjectionSettings, StoredSettings};
use projection::grid::{self, Viewport};
use projection::reveal::DisplayedNote;

use crate::components::sticky_note::{StickyNote, note_style};
use crate::util::browser;

/// Footer call to action shown along the bottom of the projection. The
/// access code is only available when the viewer is a signed-in organizer.
#[must_use]
pub fn footer_text(join_url: &str, access_code: Option<&str>) -> String {
    match access_code {
        Some(code) => format!("Join at {join_url}  ·  Code {code}"),
        None => format!("Join at {join_url}"),
    }
}

/// Status line shown on the board while the slug is unresolved. A definitive
/// 404 reads differently from a lookup that hasn't answered yet; once the
/// event resolves there is nothing to show.
#[must_use]
pub fn board_notice(event_resolved: bool, not_found: bool) -> Option<&'static str> {
    if event_resolved {
        None
    } else if not_found {
        Some("Event not found. The requested event could not be found.")
    } else {
        Some("Loading event...")
    }
}

/// The projection surface for one event.
#[component]
pub fn ProjectionPage() -> impl IntoView {
    let params = use_params_map();
    let slug = Memo::new(move |_| params.read().get("slug").unwrap_or_default());

    let event = RwSignal::new(None::<EventSummary>);
    let settings = RwSignal::new(ProjectionSettings::resolved("", &StoredSettings::default()));
    let notes = RwSignal::new(Vec::<DisplayedNote>::new());
    let access_code = RwSignal::new(None::<String>);
    let not_found = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;
        use std::time::Duration;

        use gloo_timers::future::sleep;
        use projection::consts::{POLL_INTERVAL_MS, REVEAL_INTERVAL_MS};
        use projection::reveal::RevealQueue;

        use crate::state::projection::SessionHandle;

        let session = SessionHandle::new();
        let session_cleanup = session.clone();

        Effect::new(move || {
            let slug_value = slug.get();
            if slug_value.is_empty() {
                return;
            }
            // Invalidate any loops still running for a previous event, then
            // start a fresh reveal session for this one.
            session.bump_generation();
            let generation = session.generation();
            notes.set(Vec::new());
            not_found.set(false);
            let queue = Rc::new(RefCell::new(RevealQueue::new()));

            let poll_session = session.clone();
            let poll_queue = Rc::clone(&queue);
            leptos::task::spawn_local(async move {
                use crate::net::api::EventLookup;

                // Resolve the slug on the poll cadence rather than once: a
                // transient failure at mount must not blank a live screen,
                // and a 404 can turn into a hit if the event appears later.
                let summary = loop {
                    match crate::net::api::lookup_event_summary(&slug_value).await {
                        EventLookup::Found(summary) => break summary,
                        EventLookup::NotFound => {
                            if poll_session.is_current(generation) {
                                not_found.set(true);
                            }
                        }
                        EventLookup::Unavailable => {
                            log::warn!("projection: event lookup failed; retrying");
                        }
                    }
                    sleep(Duration::from_millis(u64::from(POLL_INTERVAL_MS))).await;
                    if !poll_session.is_current(generation) {
                        return;
                    }
                };
                if !poll_session.is_current(generation) {
                    return;
                }
                not_found.set(false);
                let event_id = summary.id;
                let event_name = summary.name.clone();
                event.set(Some(summary));

                // Organizers get the access code in the footer; for anyone
                // else this fetch quietly comes back empty.
                if let Some(list) = crate::net::api::fetch_events().await {
                    access_code.set(
                        crate::pages::admin::find_event_by_slug(&list, &slug_value)
                            .map(|found| found.access_code),
                    );
                }

                loop {
                    if let Some(stored) = crate::net::api::fetch_settings(event_id).await {
                        if poll_session.is_current(generation) {
                            settings.set(ProjectionSettings::resolved(&event_name, &stored));
                        }
                    } else {
                        log::warn!("settings poll failed; keeping last snapshot");
                    }
                    if let Some(list) = crate::net::api::fetch_approved_messages(event_id).await {
                        if poll_session.is_current(generation) {
                            poll_queue.borrow_mut().reconcile(&list);
                        }
                    } else {
                        log::warn!("approved-messages poll failed; keeping last snapshot");
                    }
                    sleep(Duration::from_millis(u64::from(POLL_INTERVAL_MS))).await;
                    if !poll_session.is_current(generation) {
                        break;
                    }
                }
            });

            let reveal_session = session.clone();
            let reveal_queue = Rc::clone(&queue);
            leptos::task::spawn_local(async move {
                loop {
                    sleep(Duration::from_millis(u64::from(REVEAL_INTERVAL_MS))).await;
                    if !reveal_session.is_current(generation) {
                        break;
                    }
                    let mut queue = reveal_queue.borrow_mut();
                    if queue.reveal_next(&settings.get_untracked()).is_some() {
                        notes.set(queue.displayed().to_vec());
                    }
                }
            });
        });

        on_cleanup(move || session_cleanup.stop());
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = slug;

    let surface_style = move || format!("background-color:{};", settings.get().background_color);

    let footer = move || {
        event.get().map(|summary| {
            let url = browser::join_url(&browser::origin(), &summary.slug);
            let code = access_code.get();
            footer_text(&url, code.as_deref())
        })
    };

    view! {
        <div class="projection-page" style=surface_style>
            <header class="projection-page__header">
                <h1 class="projection-page__title">{move || settings.get().title}</h1>
            </header>
            <div class="projection-page__board">
                {move || {
                    board_notice(event.get().is_some(), not_found.get())
                        .map(|text| view! { <p class="projection-page__notice">{text}</p> })
                }}
                <For
                    each=move || notes.get()
                    key=|note| note.message_id
                    let:note
                >
                    {
                        let id = note.message_id;
                        let color = note.color.clone();
                        let style = Signal::derive(move || {
                            let all = notes.get();
                            let total = all.len().max(1);
                            let index =
                                all.iter().position(|n| n.message_id == id).unwrap_or(0);
                            let (width, height) = browser::viewport_size();
                            let position =
                                grid::position_for(index, total, Viewport::new(width, height));
                            note_style(position, &color, settings.get().font_size)
                        });
                        view! {
                            <StickyNote
                                content=note.content.clone()
                                author_name=note.author_name.clone()
                                style
                            />
                        }
                    }
                </For>
            </div>
            <footer class="projection-page__footer">{footer}</footer>
        </div>
    }
}
