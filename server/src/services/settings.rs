//! Projection settings service.
//!
//! Settings are stored sparse: one optional row per event, every column
//! nullable. The server never fills in display defaults; the client owns
//! those so an unset field and a missing row mean the same thing.

use model::StoredSettings;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("event not found")]
    EventNotFound,
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.code().as_deref() == Some("23503"))
}

/// Decode the jsonb palette column; anything but an array of strings
/// counts as unset.
fn colors_from_json(value: Option<serde_json::Value>) -> Option<Vec<String>> {
    value.and_then(|v| serde_json::from_value::<Vec<String>>(v).ok())
}

/// Fetch an event's stored settings; a missing row comes back all-`None`.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn get_settings(pool: &PgPool, event_id: Uuid) -> Result<StoredSettings, SettingsError> {
    let row = sqlx::query_as::<_, (Option<String>, Option<String>, Option<i32>, Option<serde_json::Value>)>(
        "SELECT title, background_color, font_size, sticky_note_colors
         FROM projection_settings
         WHERE event_id = $1",
    )
    .bind(event_id)
    .fetch_optional(pool)
    .await?;

    Ok(match row {
        Some((title, background_color, font_size, colors)) => StoredSettings {
            title,
            background_color,
            font_size,
            sticky_note_colors: colors_from_json(colors),
        },
        None => StoredSettings::default(),
    })
}

/// Replace an event's settings row, creating it on first write.
///
/// # Errors
///
/// `EventNotFound` when the event does not exist.
pub async fn upsert_settings(
    pool: &PgPool,
    event_id: Uuid,
    settings: &StoredSettings,
) -> Result<StoredSettings, SettingsError> {
    let colors_json = settings.sticky_note_colors.clone().map(serde_json::Value::from);

    let row = sqlx::query_as::<_, (Option<String>, Option<String>, Option<i32>, Option<serde_json::Value>)>(
        r"INSERT INTO projection_settings (event_id, title, background_color, font_size, sticky_note_colors)
          VALUES ($1, $2, $3, $4, $5)
          ON CONFLICT (event_id) DO UPDATE SET
              title = EXCLUDED.title,
              background_color = EXCLUDED.background_color,
              font_size = EXCLUDED.font_size,
              sticky_note_colors = EXCLUDED.sticky_note_colors,
              updated_at = now()
          RETURNING title, background_color, font_size, sticky_note_colors",
    )
    .bind(event_id)
    .bind(settings.title.as_deref())
    .bind(settings.background_color.as_deref())
    .bind(settings.font_size)
    .bind(colors_json)
    .fetch_one(pool)
    .await
    .map_err(|err| {
        if is_foreign_key_violation(&err) {
            SettingsError::EventNotFound
        } else {
            SettingsError::Database(err)
        }
    })?;

    let (title, background_color, font_size, colors) = row;
    Ok(StoredSettings {
        title,
        background_color,
        font_size,
        sticky_note_colors: colors_from_json(colors),
    })
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
