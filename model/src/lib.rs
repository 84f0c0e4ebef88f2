//! Shared data model for the workshop engagement platform.
//!
//! This crate owns the wire representation used by both `server` and
//! `client`: events, messages, projection settings, and the JSON payloads
//! exchanged over the REST API. Display defaults live here too so the two
//! sides never disagree about what an unset setting means.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum accepted length of an attendee message, in characters.
pub const MAX_MESSAGE_LEN: usize = 200;

/// Palette applied when an event has no stored sticky note colors.
pub const DEFAULT_STICKY_COLORS: [&str; 5] =
    ["#fef3c7", "#fce7f3", "#dbeafe", "#d1fae5", "#fed7aa"];

/// Background applied when an event has no stored background color.
pub const DEFAULT_BACKGROUND_COLOR: &str = "#ffffff";

/// Font size in pixels applied when an event has no stored font size.
pub const DEFAULT_FONT_SIZE: i32 = 18;

/// Error returned when a message status string is not a known variant.
#[derive(Debug, thiserror::Error)]
#[error("unknown message status: {0}")]
pub struct ParseStatusError(pub String);

/// Error returned when an access mode string is not a known variant.
#[derive(Debug, thiserror::Error)]
#[error("unknown access mode: {0}")]
pub struct ParseAccessModeError(pub String);

// =============================================================================
// STATUS AND MODE ENUMS
// =============================================================================

/// Moderation state of an attendee message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    /// Submitted, awaiting an organizer decision.
    Pending,
    /// Cleared for the projection display.
    Approved,
    /// Declined; never displayed.
    Rejected,
}

impl MessageStatus {
    /// Wire and database text form of the status.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl std::str::FromStr for MessageStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            other => Err(ParseStatusError(other.to_owned())),
        }
    }
}

/// How attendees get into an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessMode {
    /// Anyone with the link may join.
    Open,
    /// Joining requires the event's access code.
    CodeProtected,
}

impl AccessMode {
    /// Wire and database text form of the mode.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::CodeProtected => "code_protected",
        }
    }
}

impl std::str::FromStr for AccessMode {
    type Err = ParseAccessModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(Self::Open),
            "code_protected" => Ok(Self::CodeProtected),
            other => Err(ParseAccessModeError(other.to_owned())),
        }
    }
}

// =============================================================================
// ENTITIES
// =============================================================================

/// A workshop event. Organizer-facing shape; includes the access code.
/// Anything attendee-visible uses [`EventSummary`] instead.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: Uuid,
    pub name: String,
    /// URL-safe identifier used in attendee-facing routes.
    pub slug: String,
    pub description: Option<String>,
    /// Six-character join code (uppercase letters and digits, no lookalikes).
    pub access_code: String,
    pub access_mode: AccessMode,
    /// Inactive events refuse new joins and submissions.
    pub is_active: bool,
    /// ISO-8601 UTC timestamp rendered by the server.
    pub created_at: String,
    pub updated_at: String,
}

/// Public view of an event, safe to hand to attendees.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventSummary {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub access_mode: AccessMode,
    pub is_active: bool,
}

/// An attendee-submitted message.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub event_id: Uuid,
    pub content: String,
    pub author_name: Option<String>,
    pub author_email: Option<String>,
    pub status: MessageStatus,
    /// ISO-8601 UTC timestamp rendered by the server.
    pub created_at: String,
}

/// An attendee who joined an event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorkshopUser {
    pub id: Uuid,
    pub event_id: Uuid,
    pub name: String,
    pub email: Option<String>,
    pub created_at: String,
}

/// One recorded join attempt against an event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AccessAttempt {
    pub id: Uuid,
    pub event_id: Uuid,
    pub attempted_code: String,
    pub success: bool,
    pub user_name: Option<String>,
    pub user_email: Option<String>,
    pub created_at: String,
}

// =============================================================================
// PROJECTION SETTINGS
// =============================================================================

/// Stored projection settings as they cross the wire. Every field is
/// optional; an event with no settings row serializes as all-`None` and the
/// client resolves defaults via [`ProjectionSettings::resolved`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StoredSettings {
    pub title: Option<String>,
    pub background_color: Option<String>,
    pub font_size: Option<i32>,
    pub sticky_note_colors: Option<Vec<String>>,
}

/// Fully resolved display settings consumed by the projection page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSettings {
    pub title: String,
    pub background_color: String,
    pub font_size: i32,
    pub sticky_note_colors: Vec<String>,
}

impl ProjectionSettings {
    /// Fill in defaults for anything `stored` leaves unset. The title falls
    /// back to `"<event name> - Ideas Board"`.
    #[must_use]
    pub fn resolved(event_name: &str, stored: &StoredSettings) -> Self {
        Self {
            title: stored
                .title
                .clone()
                .unwrap_or_else(|| format!("{event_name} - Ideas Board")),
            background_color: stored
                .background_color
                .clone()
                .unwrap_or_else(|| DEFAULT_BACKGROUND_COLOR.to_owned()),
            font_size: stored.font_size.unwrap_or(DEFAULT_FONT_SIZE),
            sticky_note_colors: stored.sticky_note_colors.clone().unwrap_or_else(|| {
                DEFAULT_STICKY_COLORS.iter().map(|c| (*c).to_owned()).collect()
            }),
        }
    }
}

// =============================================================================
// REQUEST / RESPONSE PAYLOADS
// =============================================================================

/// `POST /api/events` body.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateEventRequest {
    pub name: String,
    /// Explicit slug; defaults to a sanitized form of `name`.
    pub slug: Option<String>,
    pub description: Option<String>,
    pub access_mode: Option<AccessMode>,
}

/// `PATCH /api/events/{id}` body. `None` leaves a field unchanged.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateEventRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
    pub access_mode: Option<AccessMode>,
}

/// `POST /api/events/{slug}/join` body.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct JoinEventRequest {
    /// Required for code-protected events, ignored for open ones.
    pub access_code: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
}

/// `POST /api/events/{id}/messages` body.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SubmitMessageRequest {
    pub content: String,
    pub author_name: Option<String>,
    pub author_email: Option<String>,
}

/// `PATCH /api/messages/{id}` body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModerateMessageRequest {
    pub status: MessageStatus,
}

/// Per-status message tallies for an event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub pending: i64,
    pub approved: i64,
    pub rejected: i64,
    pub total: i64,
}

/// `GET /api/events/{id}/messages` response: the filtered list plus tallies
/// across all statuses so moderation tabs stay accurate under any filter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MessageListResponse {
    pub messages: Vec<Message>,
    pub counts: StatusCounts,
}

/// Response for access-code regeneration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AccessCodeResponse {
    pub access_code: String,
}

/// `POST /api/auth/register` body.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

/// `POST /api/auth/login` body.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
