//! Access gating — join codes, the attempt log, and the attendee roster.
//!
//! DESIGN
//! ======
//! Joining an event is the one write path attendees hit before they can
//! submit anything. Code-protected events compare a normalized six-character
//! code against the event row and record every attempt; open events skip the
//! check entirely. Successful joins land the attendee on the roster.

use model::{AccessAttempt, AccessMode, EventSummary, JoinEventRequest, WorkshopUser};
use rand::Rng;
use sqlx::PgPool;
use uuid::Uuid;

pub const CODE_LEN: usize = 6;
/// Uppercase letters and digits minus the lookalikes (I, L, O, 0, 1).
pub const CODE_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

#[derive(Debug, thiserror::Error)]
pub enum AccessError {
    #[error("event not found")]
    EventNotFound,
    #[error("event is no longer active")]
    EventInactive,
    #[error("invalid access code")]
    WrongCode,
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Generate a fresh join code from the restricted alphabet.
#[must_use]
pub fn generate_access_code() -> String {
    let mut rng = rand::rng();
    (0..CODE_LEN)
        .map(|_| {
            let idx = rng.random_range(0..CODE_ALPHABET.len());
            CODE_ALPHABET[idx] as char
        })
        .collect()
}

/// Trim and uppercase a submitted code; `None` if it cannot possibly match.
#[must_use]
pub fn normalize_code(code: &str) -> Option<String> {
    let normalized = code.trim().to_ascii_uppercase();
    if normalized.len() != CODE_LEN
        || !normalized
            .chars()
            .all(|c| CODE_ALPHABET.contains(&(c as u8)))
    {
        return None;
    }
    Some(normalized)
}

/// Validate a join request against the event's access mode.
///
/// Every code check against a protected event is recorded in the attempt log,
/// success or failure. Open events neither check nor log.
///
/// # Errors
///
/// `EventNotFound` for unknown slugs, `EventInactive` for deactivated events,
/// `WrongCode` when a protected event's code does not match.
pub async fn join_event(
    pool: &PgPool,
    slug: &str,
    join: &JoinEventRequest,
) -> Result<EventSummary, AccessError> {
    let row = sqlx::query_as::<_, (Uuid, String, String, Option<String>, String, String, bool)>(
        "SELECT id, name, slug, description, access_code, access_mode, is_active
         FROM events
         WHERE slug = $1",
    )
    .bind(slug)
    .fetch_optional(pool)
    .await?;

    let Some((id, name, slug, description, access_code, access_mode, is_active)) = row else {
        return Err(AccessError::EventNotFound);
    };
    if !is_active {
        return Err(AccessError::EventInactive);
    }

    let access_mode = access_mode.parse().unwrap_or(AccessMode::CodeProtected);
    if access_mode == AccessMode::CodeProtected {
        let submitted = join.access_code.as_deref().unwrap_or("");
        let matches = normalize_code(submitted).is_some_and(|code| code == access_code);
        record_attempt(pool, id, submitted, matches, join).await?;
        if !matches {
            return Err(AccessError::WrongCode);
        }
    }

    register_attendee(pool, id, join).await?;

    Ok(EventSummary { id, name, slug, description, access_mode, is_active })
}

async fn record_attempt(
    pool: &PgPool,
    event_id: Uuid,
    submitted: &str,
    success: bool,
    join: &JoinEventRequest,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO event_access_attempts (event_id, attempted_code, success, user_name, user_email)
         VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(event_id)
    .bind(submitted.trim().to_ascii_uppercase())
    .bind(success)
    .bind(join.name.as_deref())
    .bind(join.email.as_deref())
    .execute(pool)
    .await?;
    Ok(())
}

/// Add the attendee to the event roster. Re-joins with the same email
/// refresh the stored name instead of inserting a duplicate row.
async fn register_attendee(
    pool: &PgPool,
    event_id: Uuid,
    join: &JoinEventRequest,
) -> Result<(), sqlx::Error> {
    let name = join.name.as_deref().map(str::trim).filter(|v| !v.is_empty());
    let email = join
        .email
        .as_deref()
        .map(|v| v.trim().to_ascii_lowercase())
        .filter(|v| !v.is_empty());

    let Some(name) = name else {
        // Anonymous joins (open events without the gate form) leave no roster row.
        return Ok(());
    };

    sqlx::query(
        r"INSERT INTO workshop_users (event_id, name, email)
          VALUES ($1, $2, $3)
          ON CONFLICT (event_id, email) WHERE email IS NOT NULL
          DO UPDATE SET name = EXCLUDED.name",
    )
    .bind(event_id)
    .bind(name)
    .bind(email)
    .execute(pool)
    .await?;
    Ok(())
}

/// List join attempts for an event, newest first.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list_attempts(pool: &PgPool, event_id: Uuid) -> Result<Vec<AccessAttempt>, AccessError> {
    let rows = sqlx::query_as::<_, (Uuid, Uuid, String, bool, Option<String>, Option<String>, String)>(
        r#"SELECT id, event_id, attempted_code, success, user_name, user_email,
                  to_char(created_at AT TIME ZONE 'UTC', 'YYYY-MM-DD"T"HH24:MI:SS"Z"')
           FROM event_access_attempts
           WHERE event_id = $1
           ORDER BY created_at DESC"#,
    )
    .bind(event_id)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|(id, event_id, attempted_code, success, user_name, user_email, created_at)| AccessAttempt {
            id,
            event_id,
            attempted_code,
            success,
            user_name,
            user_email,
            created_at,
        })
        .collect())
}

/// List the attendee roster for an event in join order.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list_attendees(pool: &PgPool, event_id: Uuid) -> Result<Vec<WorkshopUser>, AccessError> {
    let rows = sqlx::query_as::<_, (Uuid, Uuid, String, Option<String>, String)>(
        r#"SELECT id, event_id, name, email,
                  to_char(created_at AT TIME ZONE 'UTC', 'YYYY-MM-DD"T"HH24:MI:SS"Z"')
           FROM workshop_users
           WHERE event_id = $1
           ORDER BY created_at ASC"#,
    )
    .bind(event_id)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|(id, event_id, name, email, created_at)| WorkshopUser { id, event_id, name, email, created_at })
        .collect())
}

/// Replace an event's join code, returning the new one.
///
/// # Errors
///
/// `EventNotFound` if the event does not exist.
pub async fn regenerate_access_code(pool: &PgPool, event_id: Uuid) -> Result<String, AccessError> {
    let code = generate_access_code();
    let result = sqlx::query("UPDATE events SET access_code = $2, updated_at = now() WHERE id = $1")
        .bind(event_id)
        .bind(&code)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(AccessError::EventNotFound);
    }
    Ok(code)
}

#[cfg(test)]
#[path = "access_test.rs"]
mod tests;
