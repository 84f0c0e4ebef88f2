//! Projection settings routes.
//!
//! Reads are public so the projection page can poll without a session;
//! writes require an organizer.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use model::StoredSettings;
use uuid::Uuid;

use crate::routes::auth::AuthUser;
use crate::services::settings;
use crate::state::AppState;

/// `GET /api/events/:id/settings` — stored display settings. Events that
/// never saved any come back all-unset; clients resolve the defaults.
pub async fn get_settings(
    State(state): State<AppState>,
    Path(event_id): Path<Uuid>,
) -> Result<Json<StoredSettings>, StatusCode> {
    let stored = settings::get_settings(&state.pool, event_id)
        .await
        .map_err(settings_error_to_status)?;
    Ok(Json(stored))
}

/// `PUT /api/events/:id/settings` — replace the event's display settings.
pub async fn update_settings(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(event_id): Path<Uuid>,
    Json(body): Json<StoredSettings>,
) -> Result<Json<StoredSettings>, StatusCode> {
    let stored = settings::upsert_settings(&state.pool, event_id, &body)
        .await
        .map_err(settings_error_to_status)?;
    Ok(Json(stored))
}

pub(crate) fn settings_error_to_status(err: settings::SettingsError) -> StatusCode {
    match err {
        settings::SettingsError::EventNotFound => StatusCode::NOT_FOUND,
        settings::SettingsError::Database(ref e) => {
            tracing::warn!(error = %e, "settings query failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
