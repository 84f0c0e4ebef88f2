//! Auth routes — organizer registration, login, and session management.

use axum::extract::{FromRef, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use model::{LoginRequest, RegisterRequest};
use time::Duration;

use crate::services::session;
use crate::state::AppState;

const COOKIE_NAME: &str = "session_token";

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}

pub(crate) fn cookie_secure() -> bool {
    if let Some(value) = env_bool("COOKIE_SECURE") {
        return value;
    }

    std::env::var("PUBLIC_BASE_URL")
        .map(|url| url.starts_with("https://"))
        .unwrap_or(false)
}

fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(cookie_secure())
        .build()
}

fn clear_session_cookie() -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(cookie_secure())
        .max_age(Duration::ZERO)
        .build()
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Authenticated organizer extracted from the session cookie.
/// Use as a handler parameter to require authentication.
pub struct AuthUser {
    pub organizer: session::SessionOrganizer,
    pub token: String,
}

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar.get(COOKIE_NAME).map(Cookie::value).unwrap_or_default();
        if token.is_empty() {
            return Err(StatusCode::UNAUTHORIZED);
        }

        let app_state = AppState::from_ref(state);
        let organizer = session::validate_session(&app_state.pool, token)
            .await
            .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
            .ok_or(StatusCode::UNAUTHORIZED)?;

        Ok(Self { organizer, token: token.to_owned() })
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `POST /api/auth/register` — create an organizer account, set cookie.
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<Response, StatusCode> {
    let organizer = session::register_organizer(&state.pool, &body.email, &body.password, &body.name)
        .await
        .map_err(session_error_to_status)?;

    let token = session::create_session(&state.pool, organizer.id)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "session creation failed");
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    let jar = CookieJar::new().add(session_cookie(token));
    Ok((StatusCode::CREATED, jar, Json(organizer)).into_response())
}

/// `POST /api/auth/login` — verify credentials, set cookie.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Response, StatusCode> {
    let organizer = session::login_organizer(&state.pool, &body.email, &body.password)
        .await
        .map_err(session_error_to_status)?;

    let token = session::create_session(&state.pool, organizer.id)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "session creation failed");
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    let jar = CookieJar::new().add(session_cookie(token));
    Ok((jar, Json(organizer)).into_response())
}

/// `GET /api/auth/me` — return current organizer.
pub async fn me(auth: AuthUser) -> Json<session::SessionOrganizer> {
    Json(auth.organizer)
}

/// `POST /api/auth/logout` — delete session, clear cookie.
pub async fn logout(State(state): State<AppState>, auth: AuthUser) -> impl IntoResponse {
    let _ = session::delete_session(&state.pool, &auth.token).await;

    let jar = CookieJar::new().add(clear_session_cookie());
    (jar, StatusCode::NO_CONTENT)
}

pub(crate) fn session_error_to_status(err: session::SessionError) -> StatusCode {
    match err {
        session::SessionError::InvalidEmail | session::SessionError::WeakPassword => StatusCode::UNPROCESSABLE_ENTITY,
        session::SessionError::EmailTaken => StatusCode::CONFLICT,
        session::SessionError::InvalidCredentials => StatusCode::UNAUTHORIZED,
        session::SessionError::Db(ref e) => {
            tracing::warn!(error = %e, "session query failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
