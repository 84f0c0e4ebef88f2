use super::*;

#[test]
fn board_notice_reports_loading_until_the_event_resolves() {
    assert_eq!(board_notice(false, false), Some("Loading event..."));
}

#[test]
fn board_notice_reports_a_missing_event_distinctly() {
    assert_eq!(
        board_notice(false, true),
        Some("Event not found. The requested event could not be found.")
    );
}

#[test]
fn board_notice_clears_once_the_event_is_resolved() {
    assert_eq!(board_notice(true, false), None);
    // A stale not-found flag never outranks a resolved event.
    assert_eq!(board_notice(true, true), None);
}

#[test]
fn footer_text_includes_code_only_when_present() {
    assert_eq!(
        footer_text("https://x.test/event/retro/dashboard", Some("AB3K9Z")),
        "Join at https://x.test/event/retro/dashboard  ·  Code AB3K9Z"
    );
    assert_eq!(
        footer_text("https://x.test/event/retro/dashboard", None),
        "Join at https://x.test/event/retro/dashboard"
    );
}
