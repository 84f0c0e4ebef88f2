//! Shared numeric constants for the projection crate.

// ── Layout ──────────────────────────────────────────────────────

/// Logical footprint width of one sticky note, in pixels.
pub const NOTE_WIDTH_PX: f64 = 280.0;

/// Logical footprint height of one sticky note, in pixels.
pub const NOTE_HEIGHT_PX: f64 = 180.0;

/// Width bias applied before the square-root grid split, so the grid comes
/// out wider than tall.
pub const GRID_WIDTH_BIAS: f64 = 1.5;

/// Horizontal placement clamp, in percent of viewport width.
pub const NOTE_X_MIN_PCT: f64 = 2.0;
pub const NOTE_X_MAX_PCT: f64 = 95.0;

/// Vertical placement clamp, in percent of viewport height. The top band is
/// reserved for the projection header.
pub const NOTE_Y_MIN_PCT: f64 = 15.0;
pub const NOTE_Y_MAX_PCT: f64 = 85.0;

// ── Pacing ──────────────────────────────────────────────────────

/// Delay between staggered note reveals, in milliseconds.
pub const REVEAL_INTERVAL_MS: u32 = 1000;

/// Poll cadence for approved messages and settings, in milliseconds.
pub const POLL_INTERVAL_MS: u32 = 3000;

// ── Content ─────────────────────────────────────────────────────

/// Characters of message content shown on a note before truncation.
pub const NOTE_TEXT_MAX_CHARS: usize = 160;

/// Color used when the palette filters down to nothing.
pub const FALLBACK_NOTE_COLOR: &str = "#fef3c7";
