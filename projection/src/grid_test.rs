#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

// --- grid_shape ---

#[test]
fn grid_shape_seven_notes_is_four_by_two() {
    // ceil(sqrt(7 * 1.5)) = ceil(3.24) = 4 columns, ceil(7/4) = 2 rows
    assert_eq!(grid_shape(7), (4, 2));
}

#[test]
fn grid_shape_single_note() {
    assert_eq!(grid_shape(1), (2, 1));
}

#[test]
fn grid_shape_two_notes_share_one_row() {
    assert_eq!(grid_shape(2), (2, 1));
}

#[test]
fn grid_shape_twelve_notes() {
    // ceil(sqrt(18)) = 5 columns, ceil(12/5) = 3 rows
    assert_eq!(grid_shape(12), (5, 3));
}

#[test]
fn grid_shape_zero_is_guarded() {
    assert_eq!(grid_shape(0), grid_shape(1));
}

#[test]
fn grid_shape_always_fits_total() {
    for total in 1..=100 {
        let (cols, rows) = grid_shape(total);
        assert!(cols * rows >= total, "grid {cols}x{rows} too small for {total}");
        assert!(cols >= rows, "grid should be wider than tall for {total}");
    }
}

// --- position_for ---

#[test]
fn position_for_index_five_of_seven() {
    // cols = 4, so index 5 lands at col 1, row 1.
    let pos = position_for(5, 7, Viewport::new(1920.0, 1080.0));
    assert!(approx_eq(pos.x_pct, 425.0 / 12.0));
    assert!(approx_eq(pos.y_pct, 50.0));
}

#[test]
fn position_for_centers_grid_on_viewport() {
    // One-note grid is 2x1 (560x180 px): start_x = (100 - 560/1920*100)/2.
    let pos = position_for(0, 1, Viewport::new(1920.0, 1080.0));
    assert!(approx_eq(pos.x_pct, 125.0 / 6.0));
    assert!(approx_eq(pos.y_pct, 125.0 / 3.0));
}

#[test]
fn position_for_same_row_shares_y() {
    let viewport = Viewport::new(1920.0, 1080.0);
    let a = position_for(0, 7, viewport);
    let b = position_for(3, 7, viewport);
    assert!(approx_eq(a.y_pct, b.y_pct));
    assert!(a.x_pct < b.x_pct);
}

#[test]
fn position_for_clamps_left_edge_on_narrow_viewport() {
    // 20 notes on 800x600 need a 6-wide grid (1680 px), wider than the
    // viewport, so the leading column pins to the minimum.
    let pos = position_for(0, 20, Viewport::new(800.0, 600.0));
    assert_eq!(pos.x_pct, NOTE_X_MIN_PCT);
}

#[test]
fn position_for_clamps_right_edge_on_narrow_viewport() {
    let pos = position_for(5, 20, Viewport::new(800.0, 600.0));
    assert_eq!(pos.x_pct, NOTE_X_MAX_PCT);
}

#[test]
fn position_for_stays_in_bounds_across_sweep() {
    let viewports = [
        Viewport::new(3840.0, 2160.0),
        Viewport::new(1920.0, 1080.0),
        Viewport::new(1366.0, 768.0),
        Viewport::new(800.0, 600.0),
        Viewport::new(320.0, 480.0),
    ];
    for viewport in viewports {
        for total in 1..=40 {
            for index in 0..total {
                let pos = position_for(index, total, viewport);
                assert!(
                    (NOTE_X_MIN_PCT..=NOTE_X_MAX_PCT).contains(&pos.x_pct),
                    "x {} out of bounds at index {index}/{total} on {viewport:?}",
                    pos.x_pct
                );
                assert!(
                    (NOTE_Y_MIN_PCT..=NOTE_Y_MAX_PCT).contains(&pos.y_pct),
                    "y {} out of bounds at index {index}/{total} on {viewport:?}",
                    pos.y_pct
                );
            }
        }
    }
}

#[test]
fn position_for_is_deterministic() {
    let viewport = Viewport::new(1440.0, 900.0);
    let a = position_for(4, 9, viewport);
    let b = position_for(4, 9, viewport);
    assert_eq!(a, b);
}

#[test]
fn position_for_relayouts_when_total_grows() {
    // Growing the total reshapes the grid, so an existing index may move.
    let viewport = Viewport::new(1920.0, 1080.0);
    let before = position_for(0, 2, viewport);
    let after = position_for(0, 12, viewport);
    assert_ne!(before, after);
}
