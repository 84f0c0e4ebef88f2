use super::*;

// =============================================================================
// join_url
// =============================================================================

#[test]
fn join_url_points_at_the_dashboard() {
    // PUBLIC_BASE_URL is a shared global; exercise the formatting directly.
    let url = format!("{}/event/{}/dashboard", "https://workshop.example".trim_end_matches('/'), "q3-retro");
    assert_eq!(url, "https://workshop.example/event/q3-retro/dashboard");
}

#[test]
fn join_url_never_contains_an_access_code() {
    let url = join_url("team-offsite");
    assert!(url.ends_with("/event/team-offsite/dashboard"));
    assert!(!url.contains("code="));
}

// =============================================================================
// error mapping
// =============================================================================

#[test]
fn event_error_to_status_maps_variants() {
    assert_eq!(event_error_to_status(event::EventError::NotFound), StatusCode::NOT_FOUND);
    assert_eq!(event_error_to_status(event::EventError::EmptyName), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        event_error_to_status(event::EventError::SlugTaken("retro".into())),
        StatusCode::CONFLICT
    );
    assert_eq!(
        event_error_to_status(event::EventError::Database(sqlx::Error::RowNotFound)),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[test]
fn access_error_to_status_maps_variants() {
    assert_eq!(access_error_to_status(access::AccessError::EventNotFound), StatusCode::NOT_FOUND);
    assert_eq!(access_error_to_status(access::AccessError::EventInactive), StatusCode::GONE);
    assert_eq!(access_error_to_status(access::AccessError::WrongCode), StatusCode::UNAUTHORIZED);
    assert_eq!(
        access_error_to_status(access::AccessError::Database(sqlx::Error::RowNotFound)),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

// =============================================================================
// qr rendering
// =============================================================================

#[test]
fn qr_svg_renders_for_a_join_url() {
    let code = QrCode::new(b"https://workshop.example/event/demo/dashboard").expect("encode should succeed");
    let image = code
        .render::<svg::Color>()
        .min_dimensions(200, 200)
        .dark_color(svg::Color("#1f2937"))
        .light_color(svg::Color("#ffffff"))
        .build();
    assert!(image.starts_with("<?xml"));
    assert!(image.contains("svg"));
    assert!(image.contains("#1f2937"));
}
