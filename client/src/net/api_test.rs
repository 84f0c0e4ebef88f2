use super::*;

fn event_id() -> Uuid {
    Uuid::parse_str("6fa459ea-ee8a-3ca4-894e-db77e160355e").unwrap()
}

#[test]
fn join_endpoint_formats_expected_path() {
    assert_eq!(join_endpoint("retro-week"), "/api/events/retro-week/join");
}

#[test]
fn messages_endpoint_appends_status_filter_only_when_present() {
    let id = event_id();
    assert_eq!(
        messages_endpoint(id, None),
        format!("/api/events/{id}/messages")
    );
    assert_eq!(
        messages_endpoint(id, Some("pending")),
        format!("/api/events/{id}/messages?status=pending")
    );
}

#[test]
fn approved_messages_endpoint_formats_expected_path() {
    let id = event_id();
    assert_eq!(
        approved_messages_endpoint(id),
        format!("/api/events/{id}/messages/approved")
    );
}

#[test]
fn moderate_and_settings_endpoints_format_expected_paths() {
    let id = event_id();
    assert_eq!(moderate_endpoint(id), format!("/api/messages/{id}"));
    assert_eq!(settings_endpoint(id), format!("/api/events/{id}/settings"));
}

#[test]
fn export_and_qr_urls_format_expected_paths() {
    let id = event_id();
    assert_eq!(
        export_csv_url(id, "approved"),
        format!("/api/events/{id}/export/messages.csv?status=approved")
    );
    assert_eq!(qr_svg_url("retro-week"), "/api/events/retro-week/qr.svg");
}

#[test]
fn login_failed_message_distinguishes_bad_credentials() {
    assert_eq!(login_failed_message(401), "Wrong email or password.");
    assert_eq!(login_failed_message(500), "login failed: 500");
}

#[test]
fn register_failed_message_distinguishes_conflict_and_validation() {
    assert_eq!(register_failed_message(409), "That email already has an account.");
    assert_eq!(
        register_failed_message(422),
        "Use a valid email and a password of at least 8 characters."
    );
    assert_eq!(register_failed_message(500), "registration failed: 500");
}

#[test]
fn join_failed_message_distinguishes_gate_outcomes() {
    assert_eq!(
        join_failed_message(401),
        "That code didn't match. Double-check it with your host."
    );
    assert_eq!(join_failed_message(404), "No event lives at this link.");
    assert_eq!(join_failed_message(410), "This event is closed to new joins.");
    assert_eq!(join_failed_message(502), "join failed: 502");
}

#[test]
fn submit_failed_message_distinguishes_validation_and_closed() {
    assert_eq!(
        submit_failed_message(422),
        "Messages must be between 1 and 200 characters."
    );
    assert_eq!(submit_failed_message(410), "This event is closed to new messages.");
    assert_eq!(submit_failed_message(500), "submit failed: 500");
}

#[test]
fn create_event_failed_message_distinguishes_slug_conflict() {
    assert_eq!(create_event_failed_message(409), "That slug is already taken.");
    assert_eq!(create_event_failed_message(422), "Give the event a name.");
    assert_eq!(create_event_failed_message(500), "create failed: 500");
}

#[test]
fn request_failed_message_formats_status() {
    assert_eq!(request_failed_message(503), "request failed: 503");
}
