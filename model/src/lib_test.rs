use super::*;

use std::str::FromStr;

fn sample_event() -> Event {
    Event {
        id: Uuid::new_v4(),
        name: "Rust Workshop".to_owned(),
        slug: "rust-workshop".to_owned(),
        description: Some("Intro session".to_owned()),
        access_code: "ABC234".to_owned(),
        access_mode: AccessMode::CodeProtected,
        is_active: true,
        created_at: "2025-06-01T10:00:00Z".to_owned(),
        updated_at: "2025-06-01T10:00:00Z".to_owned(),
    }
}

#[test]
fn message_status_serializes_as_lowercase_json() {
    assert_eq!(
        serde_json::to_string(&MessageStatus::Pending).expect("serialize"),
        "\"pending\""
    );
    assert_eq!(
        serde_json::to_string(&MessageStatus::Approved).expect("serialize"),
        "\"approved\""
    );
    assert_eq!(
        serde_json::to_string(&MessageStatus::Rejected).expect("serialize"),
        "\"rejected\""
    );
}

#[test]
fn message_status_round_trips_through_text_form() {
    for status in [
        MessageStatus::Pending,
        MessageStatus::Approved,
        MessageStatus::Rejected,
    ] {
        assert_eq!(
            MessageStatus::from_str(status.as_str()).expect("parse"),
            status
        );
    }
}

#[test]
fn message_status_rejects_unknown_text() {
    let err = MessageStatus::from_str("archived").expect_err("status should be invalid");
    assert_eq!(err.0, "archived");
}

#[test]
fn access_mode_uses_snake_case_wire_form() {
    assert_eq!(
        serde_json::to_string(&AccessMode::CodeProtected).expect("serialize"),
        "\"code_protected\""
    );
    assert_eq!(
        serde_json::from_str::<AccessMode>("\"open\"").expect("deserialize"),
        AccessMode::Open
    );
    assert_eq!(AccessMode::from_str("code_protected").expect("parse"), AccessMode::CodeProtected);
}

#[test]
fn access_mode_rejects_unknown_text() {
    let err = AccessMode::from_str("invite_only").expect_err("mode should be invalid");
    assert_eq!(err.0, "invite_only");
}

#[test]
fn event_json_round_trips() {
    let event = sample_event();
    let json = serde_json::to_string(&event).expect("serialize");
    let back: Event = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, event);
}

#[test]
fn resolved_settings_apply_all_defaults_when_nothing_stored() {
    let settings = ProjectionSettings::resolved("Demo Day", &StoredSettings::default());

    assert_eq!(settings.title, "Demo Day - Ideas Board");
    assert_eq!(settings.background_color, "#ffffff");
    assert_eq!(settings.font_size, 18);
    assert_eq!(settings.sticky_note_colors.len(), 5);
    assert_eq!(settings.sticky_note_colors[0], "#fef3c7");
}

#[test]
fn resolved_settings_keep_stored_values() {
    let stored = StoredSettings {
        title: Some("Ship It".to_owned()),
        background_color: Some("#E6F3FF".to_owned()),
        font_size: Some(24),
        sticky_note_colors: Some(vec!["#ffffff".to_owned(), "#000000".to_owned()]),
    };
    let settings = ProjectionSettings::resolved("ignored", &stored);

    assert_eq!(settings.title, "Ship It");
    assert_eq!(settings.background_color, "#E6F3FF");
    assert_eq!(settings.font_size, 24);
    assert_eq!(settings.sticky_note_colors.len(), 2);
}

#[test]
fn resolved_settings_default_each_field_independently() {
    let stored = StoredSettings {
        title: None,
        background_color: Some("#222222".to_owned()),
        font_size: None,
        sticky_note_colors: None,
    };
    let settings = ProjectionSettings::resolved("Standup", &stored);

    assert_eq!(settings.title, "Standup - Ideas Board");
    assert_eq!(settings.background_color, "#222222");
    assert_eq!(settings.font_size, 18);
    assert_eq!(settings.sticky_note_colors.len(), 5);
}

#[test]
fn join_request_deserializes_with_missing_optional_fields() {
    let req: JoinEventRequest = serde_json::from_str("{}").expect("deserialize");
    assert_eq!(req, JoinEventRequest::default());

    let req: JoinEventRequest =
        serde_json::from_str(r#"{"access_code":"abc234"}"#).expect("deserialize");
    assert_eq!(req.access_code.as_deref(), Some("abc234"));
    assert!(req.name.is_none());
}

#[test]
fn moderate_request_parses_status_enum() {
    let req: ModerateMessageRequest =
        serde_json::from_str(r#"{"status":"approved"}"#).expect("deserialize");
    assert_eq!(req.status, MessageStatus::Approved);

    assert!(serde_json::from_str::<ModerateMessageRequest>(r#"{"status":"Approved"}"#).is_err());
}
