#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;

use crate::consts::*;

/// Viewport dimensions in CSS pixels, read from the rendering environment at
/// layout time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A note position in percent of the viewport, for absolute placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NotePosition {
    pub x_pct: f64,
    pub y_pct: f64,
}

/// Grid shape for `total` notes: columns from the square root of the biased
/// count, rows to fit the remainder.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn grid_shape(total: usize) -> (usize, usize) {
    let total = total.max(1);
    let cols = ((total as f64 * GRID_WIDTH_BIAS).sqrt().ceil() as usize).max(1);
    let rows = total.div_ceil(cols);
    (cols, rows)
}

/// Position for the note at `index` out of `total` displayed notes.
///
/// The grid is centered on the viewport and every coordinate is clamped to
/// the placement bounds. Positions are a pure function of
/// `(index, total, viewport)`: growing `total` re-shapes the grid and moves
/// earlier notes, which reads as the board reorganizing itself rather than
/// anything being pinned in place.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn position_for(index: usize, total: usize, viewport: Viewport) -> NotePosition {
    let (cols, rows) = grid_shape(total);
    let col = index % cols;
    let row = index / cols;

    let grid_width = cols as f64 * NOTE_WIDTH_PX;
    let grid_height = rows as f64 * NOTE_HEIGHT_PX;

    let start_x = (100.0 - grid_width / viewport.width * 100.0) / 2.0;
    let start_y = (100.0 - grid_height / viewport.height * 100.0) / 2.0;

    let x = start_x + col as f64 * NOTE_WIDTH_PX / viewport.width * 100.0;
    let y = start_y + row as f64 * NOTE_HEIGHT_PX / viewport.height * 100.0;

    NotePosition {
        x_pct: x.clamp(NOTE_X_MIN_PCT, NOTE_X_MAX_PCT),
        y_pct: y.clamp(NOTE_Y_MIN_PCT, NOTE_Y_MAX_PCT),
    }
}
