//! Event routes — organizer CRUD plus the public join surface.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Json, Response};
use model::{
    AccessAttempt, AccessCodeResponse, AccessMode, CreateEventRequest, Event, EventSummary,
    JoinEventRequest, UpdateEventRequest, WorkshopUser,
};
use qrcode::QrCode;
use qrcode::render::svg;
use uuid::Uuid;

use crate::routes::auth::AuthUser;
use crate::services::{access, event};
use crate::state::AppState;

pub(crate) fn public_base_url() -> String {
    std::env::var("PUBLIC_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_owned())
}

/// Attendee-facing join URL for an event. Never embeds the access code.
pub(crate) fn join_url(slug: &str) -> String {
    format!("{}/event/{slug}/dashboard", public_base_url().trim_end_matches('/'))
}

// =============================================================================
// ORGANIZER CRUD
// =============================================================================

/// `GET /api/events` — list all events, newest first.
pub async fn list_events(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<Json<Vec<Event>>, StatusCode> {
    let events = event::list_events(&state.pool)
        .await
        .map_err(event_error_to_status)?;
    Ok(Json(events))
}

/// `POST /api/events` — create an event with a fresh access code.
pub async fn create_event(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<CreateEventRequest>,
) -> Result<(StatusCode, Json<Event>), StatusCode> {
    let created = event::create_event(
        &state.pool,
        auth.organizer.id,
        &body.name,
        body.slug.as_deref(),
        body.description.as_deref(),
        body.access_mode.unwrap_or(AccessMode::CodeProtected),
    )
    .await
    .map_err(event_error_to_status)?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// `GET /api/events/:slug` — public event summary (no access code).
pub async fn get_event_public(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<EventSummary>, StatusCode> {
    let summary = event::get_event_by_slug(&state.pool, &slug)
        .await
        .map_err(event_error_to_status)?;
    Ok(Json(summary))
}

/// `PATCH /api/events/:id` — partial update.
pub async fn update_event(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(event_id): Path<Uuid>,
    Json(body): Json<UpdateEventRequest>,
) -> Result<Json<Event>, StatusCode> {
    let updated = event::update_event(&state.pool, event_id, &body)
        .await
        .map_err(event_error_to_status)?;
    Ok(Json(updated))
}

/// `DELETE /api/events/:id` — delete an event and everything under it.
pub async fn delete_event(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(event_id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    event::delete_event(&state.pool, event_id)
        .await
        .map_err(event_error_to_status)?;
    Ok(Json(serde_json::json!({ "ok": true })))
}

// =============================================================================
// ACCESS CODE / ROSTER / ATTEMPT LOG
// =============================================================================

/// `POST /api/events/:id/access-code` — regenerate the join code.
pub async fn regenerate_access_code(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(event_id): Path<Uuid>,
) -> Result<Json<AccessCodeResponse>, StatusCode> {
    let access_code = access::regenerate_access_code(&state.pool, event_id)
        .await
        .map_err(access_error_to_status)?;
    Ok(Json(AccessCodeResponse { access_code }))
}

/// `GET /api/events/:id/attempts` — join attempt log, newest first.
pub async fn list_attempts(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(event_id): Path<Uuid>,
) -> Result<Json<Vec<AccessAttempt>>, StatusCode> {
    let attempts = access::list_attempts(&state.pool, event_id)
        .await
        .map_err(access_error_to_status)?;
    Ok(Json(attempts))
}

/// `GET /api/events/:id/attendees` — attendee roster in join order.
pub async fn list_attendees(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(event_id): Path<Uuid>,
) -> Result<Json<Vec<WorkshopUser>>, StatusCode> {
    let attendees = access::list_attendees(&state.pool, event_id)
        .await
        .map_err(access_error_to_status)?;
    Ok(Json(attendees))
}

// =============================================================================
// PUBLIC JOIN SURFACE
// =============================================================================

/// `POST /api/events/:slug/join` — validate the access code and join.
pub async fn join_event(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(body): Json<JoinEventRequest>,
) -> Result<Json<EventSummary>, StatusCode> {
    let summary = access::join_event(&state.pool, &slug, &body)
        .await
        .map_err(access_error_to_status)?;
    Ok(Json(summary))
}

/// `GET /api/events/:slug/qr.svg` — QR code of the attendee join URL.
pub async fn event_qr_svg(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Response, StatusCode> {
    let summary = event::get_event_by_slug(&state.pool, &slug)
        .await
        .map_err(event_error_to_status)?;

    let url = join_url(&summary.slug);
    let code = QrCode::new(url.as_bytes()).map_err(|e| {
        tracing::error!(error = %e, "qr encoding failed");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    let image = code
        .render::<svg::Color>()
        .min_dimensions(200, 200)
        .dark_color(svg::Color("#1f2937"))
        .light_color(svg::Color("#ffffff"))
        .build();

    Ok(([(CONTENT_TYPE, "image/svg+xml")], image).into_response())
}

// =============================================================================
// ERROR MAPPING
// =============================================================================

pub(crate) fn event_error_to_status(err: event::EventError) -> StatusCode {
    match err {
        event::EventError::NotFound => StatusCode::NOT_FOUND,
        event::EventError::EmptyName => StatusCode::UNPROCESSABLE_ENTITY,
        event::EventError::SlugTaken(_) => StatusCode::CONFLICT,
        event::EventError::Database(ref e) => {
            tracing::warn!(error = %e, "event query failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

pub(crate) fn access_error_to_status(err: access::AccessError) -> StatusCode {
    match err {
        access::AccessError::EventNotFound => StatusCode::NOT_FOUND,
        access::AccessError::EventInactive => StatusCode::GONE,
        access::AccessError::WrongCode => StatusCode::UNAUTHORIZED,
        access::AccessError::Database(ref e) => {
            tracing::warn!(error = %e, "access query failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

#[cfg(test)]
#[path = "events_test.rs"]
mod tests;
