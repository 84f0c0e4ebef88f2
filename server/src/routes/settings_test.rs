use super::*;

use crate::services::settings::SettingsError;

#[test]
fn settings_error_to_status_maps_variants() {
    assert_eq!(settings_error_to_status(SettingsError::EventNotFound), StatusCode::NOT_FOUND);
    assert_eq!(
        settings_error_to_status(SettingsError::Database(sqlx::Error::PoolClosed)),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[test]
fn put_body_accepts_partial_settings() {
    // Omitted fields deserialize to None, so a partial PUT clears the rest.
    let body: StoredSettings = serde_json::from_str(r#"{"title": "Retro Wall"}"#).unwrap();
    assert_eq!(body.title.as_deref(), Some("Retro Wall"));
    assert_eq!(body.background_color, None);
    assert_eq!(body.font_size, None);
    assert_eq!(body.sticky_note_colors, None);
}
