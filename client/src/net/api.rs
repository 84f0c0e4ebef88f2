//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Reads return `Option` so pages can keep last-known-good state when a poll
//! fails; actions return `Result<_, String>` with a user-facing message the
//! page can show inline.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use model::{
    AccessAttempt, CreateEventRequest, Event, EventSummary, JoinEventRequest, Message,
    MessageListResponse, MessageStatus, StoredSettings, SubmitMessageRequest, UpdateEventRequest,
    WorkshopUser,
};
use uuid::Uuid;

use super::types::Organizer;

#[cfg(any(test, feature = "hydrate"))]
fn join_endpoint(slug: &str) -> String {
    format!("/api/events/{slug}/join")
}

#[cfg(any(test, feature = "hydrate"))]
fn messages_endpoint(event_id: Uuid, status: Option<&str>) -> String {
    match status {
        Some(status) => format!("/api/events/{event_id}/messages?status={status}"),
        None => format!("/api/events/{event_id}/messages"),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn approved_messages_endpoint(event_id: Uuid) -> String {
    format!("/api/events/{event_id}/messages/approved")
}

#[cfg(any(test, feature = "hydrate"))]
fn moderate_endpoint(message_id: Uuid) -> String {
    format!("/api/messages/{message_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn settings_endpoint(event_id: Uuid) -> String {
    format!("/api/events/{event_id}/settings")
}

#[cfg(any(test, feature = "hydrate"))]
fn login_failed_message(status: u16) -> String {
    match status {
        401 => "Wrong email or password.".to_owned(),
        _ => format!("login failed: {status}"),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn register_failed_message(status: u16) -> String {
    match status {
        409 => "That email already has an account.".to_owned(),
        422 => "Use a valid email and a password of at least 8 characters.".to_owned(),
        _ => format!("registration failed: {status}"),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn create_event_failed_message(status: u16) -> String {
    match status {
        409 => "That slug is already taken.".to_owned(),
        422 => "Give the event a name.".to_owned(),
        _ => format!("create failed: {status}"),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn join_failed_message(status: u16) -> String {
    match status {
        401 => "That code didn't match. Double-check it with your host.".to_owned(),
        404 => "No event lives at this link.".to_owned(),
        410 => "This event is closed to new joins.".to_owned(),
        _ => format!("join failed: {status}"),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn submit_failed_message(status: u16) -> String {
    match status {
        404 => "This event no longer exists.".to_owned(),
        410 => "This event is closed to new messages.".to_owned(),
        422 => "Messages must be between 1 and 200 characters.".to_owned(),
        _ => format!("submit failed: {status}"),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(status: u16) -> String {
    format!("request failed: {status}")
}

// =============================================================================
// AUTH
// =============================================================================

/// Fetch the signed-in organizer from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_organizer() -> Option<Organizer> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Organizer>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Create an organizer account via `POST /api/auth/register`.
///
/// # Errors
///
/// Returns a user-facing message on validation failure, duplicate email, or
/// transport failure.
pub async fn register(email: &str, password: &str, name: &str) -> Result<Organizer, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password, "name": name });
        let resp = gloo_net::http::Request::post("/api/auth/register")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(register_failed_message(resp.status()));
        }
        resp.json::<Organizer>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password, name);
        Err("not available on server".to_owned())
    }
}

/// Sign in via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns a user-facing message on bad credentials or transport failure.
pub async fn login(email: &str, password: &str) -> Result<Organizer, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post("/api/auth/login")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(login_failed_message(resp.status()));
        }
        resp.json::<Organizer>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Log out the current organizer by calling `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/auth/logout")
            .send()
            .await;
    }
}

// =============================================================================
// EVENTS (ORGANIZER)
// =============================================================================

/// Fetch all events, newest first, from `GET /api/events`.
/// Returns `None` when not authenticated or on the server.
pub async fn fetch_events() -> Option<Vec<Event>> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/events")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Vec<Event>>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Create an event via `POST /api/events`.
///
/// # Errors
///
/// Returns a user-facing message on a duplicate slug, blank name, or
/// transport failure.
pub async fn create_event(request: &CreateEventRequest) -> Result<Event, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/events")
            .json(request)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(create_event_failed_message(resp.status()));
        }
        resp.json::<Event>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err("not available on server".to_owned())
    }
}

/// Partially update an event via `PATCH /api/events/{id}`.
///
/// # Errors
///
/// Returns a user-facing message if the update is rejected.
pub async fn update_event(event_id: Uuid, request: &UpdateEventRequest) -> Result<Event, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("/api/events/{event_id}");
        let resp = gloo_net::http::Request::patch(&url)
            .json(request)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message(resp.status()));
        }
        resp.json::<Event>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (event_id, request);
        Err("not available on server".to_owned())
    }
}

/// Delete an event via `DELETE /api/events/{id}`.
///
/// # Errors
///
/// Returns a user-facing message if the delete is rejected.
pub async fn delete_event(event_id: Uuid) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("/api/events/{event_id}");
        let resp = gloo_net::http::Request::delete(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = event_id;
        Err("not available on server".to_owned())
    }
}

/// Rotate an event's access code via `POST /api/events/{id}/access-code`.
///
/// # Errors
///
/// Returns a user-facing message if the rotation is rejected.
pub async fn regenerate_access_code(event_id: Uuid) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("/api/events/{event_id}/access-code");
        let resp = gloo_net::http::Request::post(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message(resp.status()));
        }
        let body: model::AccessCodeResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.access_code)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = event_id;
        Err("not available on server".to_owned())
    }
}

// =============================================================================
// PUBLIC EVENT + JOIN
// =============================================================================

/// Outcome of a public event lookup. `NotFound` is a definitive 404 from
/// the server; `Unavailable` means the request never produced an answer
/// (transport failure, 5xx, bad body) and the caller may retry.
#[derive(Debug, Clone, PartialEq)]
pub enum EventLookup {
    Found(EventSummary),
    NotFound,
    Unavailable,
}

/// Look up the public event summary via `GET /api/events/{slug}`.
pub async fn lookup_event_summary(slug: &str) -> EventLookup {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("/api/events/{slug}");
        let Ok(resp) = gloo_net::http::Request::get(&url).send().await else {
            return EventLookup::Unavailable;
        };
        if resp.status() == 404 {
            return EventLookup::NotFound;
        }
        if !resp.ok() {
            return EventLookup::Unavailable;
        }
        match resp.json::<EventSummary>().await {
            Ok(summary) => EventLookup::Found(summary),
            Err(_) => EventLookup::Unavailable,
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = slug;
        EventLookup::Unavailable
    }
}

/// Fetch the public event summary, collapsing the lookup outcome to an
/// `Option` for callers that treat a missing event and a failed fetch alike.
pub async fn fetch_event_summary(slug: &str) -> Option<EventSummary> {
    match lookup_event_summary(slug).await {
        EventLookup::Found(summary) => Some(summary),
        EventLookup::NotFound | EventLookup::Unavailable => None,
    }
}

/// Join an event via `POST /api/events/{slug}/join`.
///
/// # Errors
///
/// Returns a user-facing message on a wrong code, an inactive event, an
/// unknown slug, or transport failure.
pub async fn join_event(slug: &str, request: &JoinEventRequest) -> Result<EventSummary, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = join_endpoint(slug);
        let resp = gloo_net::http::Request::post(&url)
            .json(request)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(join_failed_message(resp.status()));
        }
        resp.json::<EventSummary>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (slug, request);
        Err("not available on server".to_owned())
    }
}

// =============================================================================
// MESSAGES
// =============================================================================

/// Submit an attendee message via `POST /api/events/{id}/messages`.
///
/// # Errors
///
/// Returns a user-facing message when the content is rejected or the event
/// is closed.
pub async fn submit_message(event_id: Uuid, request: &SubmitMessageRequest) -> Result<Message, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = messages_endpoint(event_id, None);
        let resp = gloo_net::http::Request::post(&url)
            .json(request)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(submit_failed_message(resp.status()));
        }
        resp.json::<Message>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (event_id, request);
        Err("not available on server".to_owned())
    }
}

/// Fetch the moderation list (plus status tallies) from
/// `GET /api/events/{id}/messages`, optionally filtered by status.
pub async fn fetch_messages(event_id: Uuid, status: Option<&str>) -> Option<MessageListResponse> {
    #[cfg(feature = "hydrate")]
    {
        let url = messages_endpoint(event_id, status);
        let resp = gloo_net::http::Request::get(&url).send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<MessageListResponse>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (event_id, status);
        None
    }
}

/// Fetch approved messages in submission order from
/// `GET /api/events/{id}/messages/approved`.
pub async fn fetch_approved_messages(event_id: Uuid) -> Option<Vec<Message>> {
    #[cfg(feature = "hydrate")]
    {
        let url = approved_messages_endpoint(event_id);
        let resp = gloo_net::http::Request::get(&url).send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Vec<Message>>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = event_id;
        None
    }
}

/// Approve or reject a message via `PATCH /api/messages/{id}`.
///
/// # Errors
///
/// Returns a user-facing message if the moderation call is rejected.
pub async fn moderate_message(message_id: Uuid, status: MessageStatus) -> Result<Message, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = moderate_endpoint(message_id);
        let payload = serde_json::json!({ "status": status });
        let resp = gloo_net::http::Request::patch(&url)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message(resp.status()));
        }
        resp.json::<Message>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (message_id, status);
        Err("not available on server".to_owned())
    }
}

/// Delete a message via `DELETE /api/messages/{id}`.
///
/// # Errors
///
/// Returns a user-facing message if the delete is rejected.
pub async fn delete_message(message_id: Uuid) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let url = moderate_endpoint(message_id);
        let resp = gloo_net::http::Request::delete(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message_id;
        Err("not available on server".to_owned())
    }
}

// =============================================================================
// PROJECTION SETTINGS
// =============================================================================

/// Fetch the stored projection settings from `GET /api/events/{id}/settings`.
pub async fn fetch_settings(event_id: Uuid) -> Option<StoredSettings> {
    #[cfg(feature = "hydrate")]
    {
        let url = settings_endpoint(event_id);
        let resp = gloo_net::http::Request::get(&url).send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<StoredSettings>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = event_id;
        None
    }
}

/// Replace the stored projection settings via `PUT /api/events/{id}/settings`.
///
/// # Errors
///
/// Returns a user-facing message if the save is rejected.
pub async fn save_settings(event_id: Uuid, settings: &StoredSettings) -> Result<StoredSettings, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = settings_endpoint(event_id);
        let resp = gloo_net::http::Request::put(&url)
            .json(settings)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message(resp.status()));
        }
        resp.json::<StoredSettings>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (event_id, settings);
        Err("not available on server".to_owned())
    }
}

// =============================================================================
// ROSTER + ATTEMPT LOG
// =============================================================================

/// Fetch the access-attempt log from `GET /api/events/{id}/attempts`.
pub async fn fetch_attempts(event_id: Uuid) -> Option<Vec<AccessAttempt>> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("/api/events/{event_id}/attempts");
        let resp = gloo_net::http::Request::get(&url).send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Vec<AccessAttempt>>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = event_id;
        None
    }
}

/// Fetch the attendee roster from `GET /api/events/{id}/attendees`.
pub async fn fetch_attendees(event_id: Uuid) -> Option<Vec<WorkshopUser>> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("/api/events/{event_id}/attendees");
        let resp = gloo_net::http::Request::get(&url).send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Vec<WorkshopUser>>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = event_id;
        None
    }
}

// =============================================================================
// DOWNLOAD / IMAGE URLS
// =============================================================================

/// URL of the CSV export for plain `<a download>` links.
#[must_use]
pub fn export_csv_url(event_id: Uuid, status: &str) -> String {
    format!("/api/events/{event_id}/export/messages.csv?status={status}")
}

/// URL of the join QR code image for `<img src>` tags.
#[must_use]
pub fn qr_svg_url(slug: &str) -> String {
    format!("/api/events/{slug}/qr.svg")
}
