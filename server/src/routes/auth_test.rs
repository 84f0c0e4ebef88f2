use super::*;

// =============================================================================
// env_bool — uses unique env var names to avoid races with parallel tests.
// =============================================================================

#[test]
fn env_bool_true_variants() {
    for (i, val) in ["1", "true", "yes", "on"].iter().enumerate() {
        let key = format!("__TEST_EB_TRUE_{i}__");
        unsafe { std::env::set_var(&key, val) };
        assert_eq!(env_bool(&key), Some(true), "expected true for {val:?}");
        unsafe { std::env::remove_var(&key) };
    }
}

#[test]
fn env_bool_false_variants() {
    for (i, val) in ["0", "false", "no", "off"].iter().enumerate() {
        let key = format!("__TEST_EB_FALSE_{i}__");
        unsafe { std::env::set_var(&key, val) };
        assert_eq!(env_bool(&key), Some(false), "expected false for {val:?}");
        unsafe { std::env::remove_var(&key) };
    }
}

#[test]
fn env_bool_case_insensitive_and_trimmed() {
    let key = "__TEST_EB_CI_7731__";
    unsafe { std::env::set_var(key, "  True ") };
    assert_eq!(env_bool(key), Some(true));
    unsafe { std::env::remove_var(key) };
}

#[test]
fn env_bool_invalid_returns_none() {
    let key = "__TEST_EB_INVALID_7732__";
    unsafe { std::env::set_var(key, "maybe") };
    assert_eq!(env_bool(key), None);
    unsafe { std::env::remove_var(key) };
}

#[test]
fn env_bool_unset_returns_none() {
    assert_eq!(env_bool("__TEST_EB_SURELY_UNSET_XYZ_42__"), None);
}

// =============================================================================
// cookie builders
// =============================================================================

#[test]
fn session_cookie_is_http_only_lax_and_site_wide() {
    let cookie = session_cookie("tok-123".into());
    assert_eq!(cookie.name(), COOKIE_NAME);
    assert_eq!(cookie.value(), "tok-123");
    assert_eq!(cookie.path(), Some("/"));
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.same_site(), Some(SameSite::Lax));
}

#[test]
fn clear_session_cookie_expires_immediately() {
    let cookie = clear_session_cookie();
    assert_eq!(cookie.name(), COOKIE_NAME);
    assert_eq!(cookie.value(), "");
    assert_eq!(cookie.max_age(), Some(Duration::ZERO));
}

// =============================================================================
// session_error_to_status
// =============================================================================

#[test]
fn session_error_to_status_maps_variants() {
    assert_eq!(
        session_error_to_status(session::SessionError::InvalidEmail),
        StatusCode::UNPROCESSABLE_ENTITY
    );
    assert_eq!(
        session_error_to_status(session::SessionError::WeakPassword),
        StatusCode::UNPROCESSABLE_ENTITY
    );
    assert_eq!(session_error_to_status(session::SessionError::EmailTaken), StatusCode::CONFLICT);
    assert_eq!(
        session_error_to_status(session::SessionError::InvalidCredentials),
        StatusCode::UNAUTHORIZED
    );
    assert_eq!(
        session_error_to_status(session::SessionError::Db(sqlx::Error::RowNotFound)),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}
