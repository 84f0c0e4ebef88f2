//! Organizer accounts and session management.
//!
//! ARCHITECTURE
//! ============
//! Organizers sign in with email and password; a successful login mints a
//! long-lived random session token stored server-side and carried by an
//! HTTP-only cookie. Passwords are stored as salted SHA-256 digests with a
//! per-account random salt.

use std::fmt::Write;

use rand::Rng;
use sha2::{Digest, Sha256};
use sqlx::{PgPool, Row};
use uuid::Uuid;

const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("invalid email")]
    InvalidEmail,
    #[error("password too short")]
    WeakPassword,
    #[error("email already registered")]
    EmailTaken,
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate a cryptographically random 32-byte hex token.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

/// Generate a random 16-byte hex password salt.
#[must_use]
pub fn generate_salt() -> String {
    let bytes: [u8; 16] = rand::rng().random();
    bytes_to_hex(&bytes)
}

/// Hex SHA-256 of `salt || password`.
#[must_use]
pub fn hash_password(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    let digest = hasher.finalize();
    bytes_to_hex(&digest)
}

#[must_use]
pub fn normalize_email(email: &str) -> Option<String> {
    let normalized = email.trim().to_ascii_lowercase();
    if normalized.is_empty() || !normalized.contains('@') {
        return None;
    }
    let parts = normalized.split('@').collect::<Vec<_>>();
    if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
        return None;
    }
    Some(normalized)
}

fn name_from_email(email: &str) -> String {
    let local = email
        .split('@')
        .next()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or("organizer");
    local.to_owned()
}

pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.code().as_deref() == Some("23505"))
}

/// Organizer row returned from session validation.
#[derive(Debug, Clone, serde::Serialize)]
pub struct SessionOrganizer {
    /// Unique organizer identifier.
    pub id: Uuid,
    /// Normalized login email.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Account role (currently always `"admin"`).
    pub role: String,
}

/// Create an organizer account with a freshly salted password hash.
pub async fn register_organizer(
    pool: &PgPool,
    email: &str,
    password: &str,
    name: &str,
) -> Result<SessionOrganizer, SessionError> {
    let normalized = normalize_email(email).ok_or(SessionError::InvalidEmail)?;
    if password.len() < MIN_PASSWORD_LEN {
        return Err(SessionError::WeakPassword);
    }

    let trimmed = name.trim();
    let display_name = if trimmed.is_empty() { name_from_email(&normalized) } else { trimmed.to_owned() };

    let salt = generate_salt();
    let password_hash = hash_password(&salt, password);

    let row = sqlx::query(
        r"INSERT INTO organizers (email, name, password_salt, password_hash)
          VALUES ($1, $2, $3, $4)
          RETURNING id, email, name, role",
    )
    .bind(&normalized)
    .bind(&display_name)
    .bind(&salt)
    .bind(&password_hash)
    .fetch_one(pool)
    .await
    .map_err(|err| {
        if is_unique_violation(&err) {
            SessionError::EmailTaken
        } else {
            SessionError::Db(err)
        }
    })?;

    Ok(SessionOrganizer {
        id: row.get("id"),
        email: row.get("email"),
        name: row.get("name"),
        role: row.get("role"),
    })
}

/// Verify credentials and return the organizer on success.
pub async fn login_organizer(
    pool: &PgPool,
    email: &str,
    password: &str,
) -> Result<SessionOrganizer, SessionError> {
    let normalized = normalize_email(email).ok_or(SessionError::InvalidCredentials)?;

    let row = sqlx::query(
        "SELECT id, email, name, role, password_salt, password_hash
         FROM organizers
         WHERE email = $1",
    )
    .bind(&normalized)
    .fetch_optional(pool)
    .await?;

    let Some(row) = row else {
        return Err(SessionError::InvalidCredentials);
    };

    let salt: String = row.get("password_salt");
    let stored_hash: String = row.get("password_hash");
    if hash_password(&salt, password) != stored_hash {
        return Err(SessionError::InvalidCredentials);
    }

    Ok(SessionOrganizer {
        id: row.get("id"),
        email: row.get("email"),
        name: row.get("name"),
        role: row.get("role"),
    })
}

/// Create a session for the given organizer, returning the token.
pub async fn create_session(pool: &PgPool, organizer_id: Uuid) -> Result<String, sqlx::Error> {
    let token = generate_token();
    sqlx::query("INSERT INTO sessions (token, organizer_id) VALUES ($1, $2)")
        .bind(&token)
        .bind(organizer_id)
        .execute(pool)
        .await?;
    Ok(token)
}

/// Validate a session token and return the associated organizer.
pub async fn validate_session(pool: &PgPool, token: &str) -> Result<Option<SessionOrganizer>, sqlx::Error> {
    let row = sqlx::query(
        r"SELECT o.id, o.email, o.name, o.role
          FROM sessions s
          JOIN organizers o ON o.id = s.organizer_id
          WHERE s.token = $1 AND s.expires_at > now()",
    )
    .bind(token)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|r| SessionOrganizer {
        id: r.get("id"),
        email: r.get("email"),
        name: r.get("name"),
        role: r.get("role"),
    }))
}

/// Delete a session by token.
pub async fn delete_session(pool: &PgPool, token: &str) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM sessions WHERE token = $1")
        .bind(token)
        .execute(pool)
        .await?;
    Ok(())
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
