//! Event service — CRUD and slug handling.
//!
//! DESIGN
//! ======
//! Events are the root of everything else: messages, settings, roster, and
//! the attempt log all hang off an event row and cascade on delete. Slugs
//! are derived from the event name unless the organizer supplies one, and
//! collisions surface as a dedicated error rather than a bare 500.

use model::{AccessMode, Event, EventSummary, UpdateEventRequest};
use sqlx::PgPool;
use uuid::Uuid;

use crate::services::access;
use crate::services::session::is_unique_violation;

#[derive(Debug, thiserror::Error)]
pub enum EventError {
    #[error("event not found")]
    NotFound,
    #[error("event name required")]
    EmptyName,
    #[error("slug already in use: {0}")]
    SlugTaken(String),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

type EventRow = (Uuid, String, String, Option<String>, String, String, bool, String, String);

fn event_from_row(row: EventRow) -> Event {
    let (id, name, slug, description, access_code, access_mode, is_active, created_at, updated_at) = row;
    Event {
        id,
        name,
        slug,
        description,
        access_code,
        access_mode: access_mode.parse().unwrap_or(AccessMode::CodeProtected),
        is_active,
        created_at,
        updated_at,
    }
}

/// Lowercase the input and replace anything outside `[a-z0-9-]` with `-`.
#[must_use]
pub fn sanitize_slug(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' {
                c
            } else {
                '-'
            }
        })
        .collect()
}

/// Create an event with a fresh access code.
///
/// # Errors
///
/// `EmptyName` when the name is blank, `SlugTaken` on a slug collision.
pub async fn create_event(
    pool: &PgPool,
    created_by: Uuid,
    name: &str,
    slug: Option<&str>,
    description: Option<&str>,
    access_mode: AccessMode,
) -> Result<Event, EventError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(EventError::EmptyName);
    }

    let slug = match slug.map(str::trim).filter(|s| !s.is_empty()) {
        Some(explicit) => sanitize_slug(explicit),
        None => sanitize_slug(name),
    };
    let access_code = access::generate_access_code();

    let row = sqlx::query_as::<_, EventRow>(
        r#"INSERT INTO events (name, slug, description, access_code, access_mode, created_by)
           VALUES ($1, $2, $3, $4, $5, $6)
           RETURNING id, name, slug, description, access_code, access_mode, is_active,
                     to_char(created_at AT TIME ZONE 'UTC', 'YYYY-MM-DD"T"HH24:MI:SS"Z"'),
                     to_char(updated_at AT TIME ZONE 'UTC', 'YYYY-MM-DD"T"HH24:MI:SS"Z"')"#,
    )
    .bind(name)
    .bind(&slug)
    .bind(description)
    .bind(&access_code)
    .bind(access_mode.as_str())
    .bind(created_by)
    .fetch_one(pool)
    .await
    .map_err(|err| {
        if is_unique_violation(&err) {
            EventError::SlugTaken(slug.clone())
        } else {
            EventError::Database(err)
        }
    })?;

    Ok(event_from_row(row))
}

/// List all events, newest first.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list_events(pool: &PgPool) -> Result<Vec<Event>, EventError> {
    let rows = sqlx::query_as::<_, EventRow>(
        r#"SELECT id, name, slug, description, access_code, access_mode, is_active,
                  to_char(created_at AT TIME ZONE 'UTC', 'YYYY-MM-DD"T"HH24:MI:SS"Z"'),
                  to_char(updated_at AT TIME ZONE 'UTC', 'YYYY-MM-DD"T"HH24:MI:SS"Z"')
           FROM events
           ORDER BY created_at DESC"#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(event_from_row).collect())
}

/// Fetch one event by id, access code included.
///
/// # Errors
///
/// `NotFound` if no such event exists.
pub async fn get_event(pool: &PgPool, event_id: Uuid) -> Result<Event, EventError> {
    let row = sqlx::query_as::<_, EventRow>(
        r#"SELECT id, name, slug, description, access_code, access_mode, is_active,
                  to_char(created_at AT TIME ZONE 'UTC', 'YYYY-MM-DD"T"HH24:MI:SS"Z"'),
                  to_char(updated_at AT TIME ZONE 'UTC', 'YYYY-MM-DD"T"HH24:MI:SS"Z"')
           FROM events
           WHERE id = $1"#,
    )
    .bind(event_id)
    .fetch_optional(pool)
    .await?
    .ok_or(EventError::NotFound)?;

    Ok(event_from_row(row))
}

/// Fetch the public view of an event by slug. Never exposes the access code.
///
/// # Errors
///
/// `NotFound` if no such event exists.
pub async fn get_event_by_slug(pool: &PgPool, slug: &str) -> Result<EventSummary, EventError> {
    let row = sqlx::query_as::<_, (Uuid, String, String, Option<String>, String, bool)>(
        "SELECT id, name, slug, description, access_mode, is_active
         FROM events
         WHERE slug = $1",
    )
    .bind(slug)
    .fetch_optional(pool)
    .await?
    .ok_or(EventError::NotFound)?;

    let (id, name, slug, description, access_mode, is_active) = row;
    Ok(EventSummary {
        id,
        name,
        slug,
        description,
        access_mode: access_mode.parse().unwrap_or(AccessMode::CodeProtected),
        is_active,
    })
}

/// Apply a partial update and return the refreshed event. Fields left `None`
/// are untouched; an empty description clears the column.
///
/// # Errors
///
/// `NotFound` if the event does not exist, `EmptyName` when the new name is
/// blank.
pub async fn update_event(
    pool: &PgPool,
    event_id: Uuid,
    update: &UpdateEventRequest,
) -> Result<Event, EventError> {
    if let Some(name) = update.name.as_deref() {
        let name = name.trim();
        if name.is_empty() {
            return Err(EventError::EmptyName);
        }
        sqlx::query("UPDATE events SET name = $2, updated_at = now() WHERE id = $1")
            .bind(event_id)
            .bind(name)
            .execute(pool)
            .await?;
    }
    if let Some(description) = update.description.as_deref() {
        let trimmed = description.trim();
        let value = if trimmed.is_empty() { None } else { Some(trimmed) };
        sqlx::query("UPDATE events SET description = $2, updated_at = now() WHERE id = $1")
            .bind(event_id)
            .bind(value)
            .execute(pool)
            .await?;
    }
    if let Some(is_active) = update.is_active {
        sqlx::query("UPDATE events SET is_active = $2, updated_at = now() WHERE id = $1")
            .bind(event_id)
            .bind(is_active)
            .execute(pool)
            .await?;
    }
    if let Some(access_mode) = update.access_mode {
        sqlx::query("UPDATE events SET access_mode = $2, updated_at = now() WHERE id = $1")
            .bind(event_id)
            .bind(access_mode.as_str())
            .execute(pool)
            .await?;
    }

    get_event(pool, event_id).await
}

/// Delete an event. Messages, settings, roster, and attempts cascade.
///
/// # Errors
///
/// `NotFound` if the event does not exist.
pub async fn delete_event(pool: &PgPool, event_id: Uuid) -> Result<(), EventError> {
    let result = sqlx::query("DELETE FROM events WHERE id = $1")
        .bind(event_id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(EventError::NotFound);
    }
    Ok(())
}

#[cfg(test)]
#[path = "event_test.rs"]
mod tests;
