//! Browser environment reads and effects.
//!
//! TRADE-OFFS
//! ==========
//! Every function here degrades cleanly outside a browser: SSR paths return
//! fixed fallbacks or no-op so server rendering stays deterministic.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

/// Viewport used when no window is available (SSR or headless tests).
pub const FALLBACK_VIEWPORT: (f64, f64) = (1920.0, 1080.0);

/// Current viewport size in CSS pixels.
#[must_use]
pub fn viewport_size() -> (f64, f64) {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return FALLBACK_VIEWPORT;
        };
        let width = window.inner_width().ok().and_then(|v| v.as_f64());
        let height = window.inner_height().ok().and_then(|v| v.as_f64());
        match (width, height) {
            (Some(w), Some(h)) if w > 0.0 && h > 0.0 => (w, h),
            _ => FALLBACK_VIEWPORT,
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        FALLBACK_VIEWPORT
    }
}

/// Origin (scheme + host + port) of the running page, empty on the server.
#[must_use]
pub fn origin() -> String {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

/// Attendee join URL for an event, for display and clipboard copy.
#[must_use]
pub fn join_url(origin: &str, slug: &str) -> String {
    format!("{}/event/{slug}/dashboard", origin.trim_end_matches('/'))
}

/// Copy text to the system clipboard. Best-effort; the returned promise is
/// intentionally dropped.
pub fn copy_to_clipboard(text: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.navigator().clipboard().write_text(text);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
    }
}
