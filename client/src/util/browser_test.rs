use super::*;

#[test]
fn join_url_points_at_the_dashboard_page() {
    assert_eq!(
        join_url("https://board.example.com", "retro-week"),
        "https://board.example.com/event/retro-week/dashboard"
    );
}

#[test]
fn join_url_tolerates_trailing_slash_origins() {
    assert_eq!(
        join_url("http://localhost:3000/", "demo"),
        "http://localhost:3000/event/demo/dashboard"
    );
}

#[test]
fn viewport_size_falls_back_without_a_window() {
    // Native test builds have no browser window.
    assert_eq!(viewport_size(), FALLBACK_VIEWPORT);
}
