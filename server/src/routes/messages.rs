//! Message routes — attendee submission, moderation, and CSV export.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::response::{IntoResponse, Json, Response};
use model::{Message, MessageListResponse, MessageStatus, ModerateMessageRequest, SubmitMessageRequest};
use serde::Deserialize;
use uuid::Uuid;

use crate::routes::auth::AuthUser;
use crate::routes::events::event_error_to_status;
use crate::services::{event, export, message};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct MessageListQuery {
    pub status: Option<String>,
}

/// Resolve the `?status=` filter; `all` (or nothing) means no filter.
fn parse_status_filter(raw: Option<&str>) -> Result<Option<MessageStatus>, StatusCode> {
    match raw {
        None | Some("all") => Ok(None),
        Some(value) => value
            .parse::<MessageStatus>()
            .map(Some)
            .map_err(|_| StatusCode::UNPROCESSABLE_ENTITY),
    }
}

/// `POST /api/events/:id/messages` — attendee submission, lands pending.
pub async fn submit_message(
    State(state): State<AppState>,
    Path(event_id): Path<Uuid>,
    Json(body): Json<SubmitMessageRequest>,
) -> Result<(StatusCode, Json<Message>), StatusCode> {
    let created = message::submit_message(&state.pool, event_id, &body)
        .await
        .map_err(message_error_to_status)?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `GET /api/events/:id/messages` — moderation list with status tallies.
pub async fn list_messages(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(event_id): Path<Uuid>,
    Query(query): Query<MessageListQuery>,
) -> Result<Json<MessageListResponse>, StatusCode> {
    let filter = parse_status_filter(query.status.as_deref())?;

    let messages = message::list_messages(&state.pool, event_id, filter)
        .await
        .map_err(message_error_to_status)?;
    let counts = message::status_counts(&state.pool, event_id)
        .await
        .map_err(message_error_to_status)?;

    Ok(Json(MessageListResponse { messages, counts }))
}

/// `GET /api/events/:id/messages/approved` — the projection read: approved
/// messages in submission order.
pub async fn approved_messages(
    State(state): State<AppState>,
    Path(event_id): Path<Uuid>,
) -> Result<Json<Vec<Message>>, StatusCode> {
    let messages = message::approved_messages(&state.pool, event_id)
        .await
        .map_err(message_error_to_status)?;
    Ok(Json(messages))
}

/// `PATCH /api/messages/:id` — approve or reject a message.
pub async fn moderate_message(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(message_id): Path<Uuid>,
    Json(body): Json<ModerateMessageRequest>,
) -> Result<Json<Message>, StatusCode> {
    let updated = message::set_status(&state.pool, message_id, body.status)
        .await
        .map_err(message_error_to_status)?;
    Ok(Json(updated))
}

/// `DELETE /api/messages/:id` — remove a message outright.
pub async fn delete_message(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(message_id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    message::delete_message(&state.pool, message_id)
        .await
        .map_err(message_error_to_status)?;
    Ok(Json(serde_json::json!({ "ok": true })))
}

/// `GET /api/events/:id/export/messages.csv` — download messages as CSV.
/// Defaults to approved messages; `?status=` selects another slice.
pub async fn export_messages_csv(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(event_id): Path<Uuid>,
    Query(query): Query<MessageListQuery>,
) -> Result<Response, StatusCode> {
    let event = event::get_event(&state.pool, event_id)
        .await
        .map_err(event_error_to_status)?;

    let (filter, label) = match query.status.as_deref() {
        None => (Some(MessageStatus::Approved), "approved"),
        Some("all") => (None, "all"),
        Some(raw) => {
            let status = raw
                .parse::<MessageStatus>()
                .map_err(|_| StatusCode::UNPROCESSABLE_ENTITY)?;
            (Some(status), status.as_str())
        }
    };

    let messages = message::list_messages(&state.pool, event_id, filter)
        .await
        .map_err(message_error_to_status)?;
    let lines = export::csv_lines(&messages);

    let stream = futures::stream::iter(
        lines
            .into_iter()
            .map(|line| Ok::<axum::body::Bytes, std::convert::Infallible>(axum::body::Bytes::from(line))),
    );
    let body = axum::body::Body::from_stream(stream);
    let filename = format!("{label}_messages_{}_{}.csv", event.slug, export::file_date());

    Ok((
        [
            (CONTENT_TYPE, "text/csv; charset=utf-8"),
            (CONTENT_DISPOSITION, &format!("attachment; filename=\"{filename}\"")),
        ],
        body,
    )
        .into_response())
}

pub(crate) fn message_error_to_status(err: message::MessageError) -> StatusCode {
    match err {
        message::MessageError::EventNotFound | message::MessageError::NotFound => StatusCode::NOT_FOUND,
        message::MessageError::EventInactive => StatusCode::GONE,
        message::MessageError::EmptyContent | message::MessageError::TooLong(_) => StatusCode::UNPROCESSABLE_ENTITY,
        message::MessageError::Database(ref e) => {
            tracing::warn!(error = %e, "message query failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

#[cfg(test)]
#[path = "messages_test.rs"]
mod tests;
