//! Message service — submission, moderation, and the projection read.
//!
//! DESIGN
//! ======
//! Attendee submissions land as `pending` and never skip the queue; only an
//! organizer moves them to `approved` or `rejected`. The projection display
//! reads exactly one thing: approved messages in submission order.

use model::{MAX_MESSAGE_LEN, Message, MessageStatus, StatusCounts, SubmitMessageRequest};
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum MessageError {
    #[error("event not found")]
    EventNotFound,
    #[error("event is no longer active")]
    EventInactive,
    #[error("message not found")]
    NotFound,
    #[error("message content required")]
    EmptyContent,
    #[error("message too long: {0} chars")]
    TooLong(usize),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

type MessageRow = (Uuid, Uuid, String, Option<String>, Option<String>, String, String);

fn message_from_row(row: MessageRow) -> Message {
    let (id, event_id, content, author_name, author_email, status, created_at) = row;
    Message {
        id,
        event_id,
        content,
        author_name,
        author_email,
        status: status.parse().unwrap_or(MessageStatus::Pending),
        created_at,
    }
}

/// Accept an attendee submission as a pending message.
///
/// # Errors
///
/// `EmptyContent`/`TooLong` on validation failure, `EventNotFound` or
/// `EventInactive` when the event cannot take submissions.
pub async fn submit_message(
    pool: &PgPool,
    event_id: Uuid,
    submit: &SubmitMessageRequest,
) -> Result<Message, MessageError> {
    let content = submit.content.trim();
    if content.is_empty() {
        return Err(MessageError::EmptyContent);
    }
    let chars = content.chars().count();
    if chars > MAX_MESSAGE_LEN {
        return Err(MessageError::TooLong(chars));
    }

    let is_active = sqlx::query_scalar::<_, bool>("SELECT is_active FROM events WHERE id = $1")
        .bind(event_id)
        .fetch_optional(pool)
        .await?
        .ok_or(MessageError::EventNotFound)?;
    if !is_active {
        return Err(MessageError::EventInactive);
    }

    let author_name = submit.author_name.as_deref().map(str::trim).filter(|v| !v.is_empty());
    let author_email = submit.author_email.as_deref().map(str::trim).filter(|v| !v.is_empty());

    let row = sqlx::query_as::<_, MessageRow>(
        r#"INSERT INTO messages (event_id, content, author_name, author_email)
           VALUES ($1, $2, $3, $4)
           RETURNING id, event_id, content, author_name, author_email, status,
                     to_char(created_at AT TIME ZONE 'UTC', 'YYYY-MM-DD"T"HH24:MI:SS"Z"')"#,
    )
    .bind(event_id)
    .bind(content)
    .bind(author_name)
    .bind(author_email)
    .fetch_one(pool)
    .await?;

    Ok(message_from_row(row))
}

/// List an event's messages for moderation, newest first, optionally
/// filtered by status.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list_messages(
    pool: &PgPool,
    event_id: Uuid,
    status: Option<MessageStatus>,
) -> Result<Vec<Message>, MessageError> {
    let rows = match status {
        Some(status) => {
            sqlx::query_as::<_, MessageRow>(
                r#"SELECT id, event_id, content, author_name, author_email, status,
                          to_char(created_at AT TIME ZONE 'UTC', 'YYYY-MM-DD"T"HH24:MI:SS"Z"')
                   FROM messages
                   WHERE event_id = $1 AND status = $2
                   ORDER BY created_at DESC"#,
            )
            .bind(event_id)
            .bind(status.as_str())
            .fetch_all(pool)
            .await?
        }
        None => {
            sqlx::query_as::<_, MessageRow>(
                r#"SELECT id, event_id, content, author_name, author_email, status,
                          to_char(created_at AT TIME ZONE 'UTC', 'YYYY-MM-DD"T"HH24:MI:SS"Z"')
                   FROM messages
                   WHERE event_id = $1
                   ORDER BY created_at DESC"#,
            )
            .bind(event_id)
            .fetch_all(pool)
            .await?
        }
    };

    Ok(rows.into_iter().map(message_from_row).collect())
}

/// Per-status tallies for an event, independent of any list filter.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn status_counts(pool: &PgPool, event_id: Uuid) -> Result<StatusCounts, MessageError> {
    let (pending, approved, rejected, total) = sqlx::query_as::<_, (i64, i64, i64, i64)>(
        "SELECT
             count(*) FILTER (WHERE status = 'pending'),
             count(*) FILTER (WHERE status = 'approved'),
             count(*) FILTER (WHERE status = 'rejected'),
             count(*)
         FROM messages
         WHERE event_id = $1",
    )
    .bind(event_id)
    .fetch_one(pool)
    .await?;

    Ok(StatusCounts { pending, approved, rejected, total })
}

/// The projection read: approved messages in submission order.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn approved_messages(pool: &PgPool, event_id: Uuid) -> Result<Vec<Message>, MessageError> {
    let rows = sqlx::query_as::<_, MessageRow>(
        r#"SELECT id, event_id, content, author_name, author_email, status,
                  to_char(created_at AT TIME ZONE 'UTC', 'YYYY-MM-DD"T"HH24:MI:SS"Z"')
           FROM messages
           WHERE event_id = $1 AND status = 'approved'
           ORDER BY created_at ASC"#,
    )
    .bind(event_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(message_from_row).collect())
}

/// Move a message to a new moderation status.
///
/// # Errors
///
/// `NotFound` if the message does not exist.
pub async fn set_status(
    pool: &PgPool,
    message_id: Uuid,
    status: MessageStatus,
) -> Result<Message, MessageError> {
    let row = sqlx::query_as::<_, MessageRow>(
        r#"UPDATE messages
           SET status = $2
           WHERE id = $1
           RETURNING id, event_id, content, author_name, author_email, status,
                     to_char(created_at AT TIME ZONE 'UTC', 'YYYY-MM-DD"T"HH24:MI:SS"Z"')"#,
    )
    .bind(message_id)
    .bind(status.as_str())
    .fetch_optional(pool)
    .await?
    .ok_or(MessageError::NotFound)?;

    Ok(message_from_row(row))
}

/// Delete a message outright.
///
/// # Errors
///
/// `NotFound` if the message does not exist.
pub async fn delete_message(pool: &PgPool, message_id: Uuid) -> Result<(), MessageError> {
    let result = sqlx::query("DELETE FROM messages WHERE id = $1")
        .bind(message_id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(MessageError::NotFound);
    }
    Ok(())
}

#[cfg(test)]
#[path = "message_test.rs"]
mod tests;
