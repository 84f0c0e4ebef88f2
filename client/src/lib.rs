//! # client
//!
//! Leptos + WASM frontend for the workshop engagement platform. Pages cover
//! the attendee submission flow, the organizer admin surface, and the
//! projection display; all pure display logic (grid layout, palette cycling,
//! reveal scheduling) lives in the `projection` crate and is only driven
//! from here.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Hydration entry point for the WASM client.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
