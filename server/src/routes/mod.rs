//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the JSON API and the Leptos SSR frontend under a single
//! Axum router. Every page (landing, organizer admin, attendee dashboard,
//! projection) is rendered by the Leptos app, so the SSR fallback owns `/`
//! and the API lives under `/api`.

pub mod auth;
pub mod events;
pub mod messages;
pub mod settings;

use std::path::PathBuf;

use axum::Router;
use axum::routing::{get, patch, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// JSON API routes shared by the SSR app and external clients.
///
/// Axum allows one parameter name per path position, so the third segment is
/// always `{event}` even though some handlers read it as a slug and others as
/// an id.
fn api_routes(state: AppState) -> Router {
    let router = Router::new()
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/me", get(auth::me))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/events", get(events::list_events).post(events::create_event))
        .route(
            "/api/events/{event}",
            get(events::get_event_public)
                .patch(events::update_event)
                .delete(events::delete_event),
        )
        .route("/api/events/{event}/access-code", post(events::regenerate_access_code))
        .route("/api/events/{event}/attempts", get(events::list_attempts))
        .route("/api/events/{event}/attendees", get(events::list_attendees))
        .route("/api/events/{event}/join", post(events::join_event))
        .route("/api/events/{event}/qr.svg", get(events::event_qr_svg))
        .route(
            "/api/events/{event}/messages",
            get(messages::list_messages).post(messages::submit_message),
        )
        .route("/api/events/{event}/messages/approved", get(messages::approved_messages))
        .route(
            "/api/events/{event}/settings",
            get(settings::get_settings).put(settings::update_settings),
        )
        .route("/api/events/{event}/export/messages.csv", get(messages::export_messages_csv))
        .route(
            "/api/messages/{id}",
            patch(messages::moderate_message).delete(messages::delete_message),
        )
        .route("/healthz", get(healthz))
        .with_state(state);

    // CORS_PERMISSIVE=false locks the API to same-origin requests.
    if auth::env_bool("CORS_PERMISSIVE").unwrap_or(true) {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        router.layer(cors)
    } else {
        router
    }
}

/// Full application: API routes plus the Leptos SSR frontend at `/`.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn leptos_app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(client::app::shell))
        .with_state(leptos_options.clone());

    // Leptos static assets (WASM, CSS, JS) live under the site root /pkg.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new()))
}

async fn healthz() -> &'static str {
    "ok"
}
