#[cfg(test)]
#[path = "palette_test.rs"]
mod palette_test;

use model::ProjectionSettings;

use crate::consts::FALLBACK_NOTE_COLOR;

/// Color for the note revealed at `index`.
///
/// Palette entries matching the background (case-insensitive) are skipped so
/// no note camouflages into the screen; the survivors cycle in palette order
/// by reveal index. An all-filtered palette falls back to a fixed color.
#[must_use]
pub fn color_for(index: usize, settings: &ProjectionSettings) -> String {
    let filtered: Vec<&String> = settings
        .sticky_note_colors
        .iter()
        .filter(|color| !color.eq_ignore_ascii_case(&settings.background_color))
        .collect();

    if filtered.is_empty() {
        return FALLBACK_NOTE_COLOR.to_owned();
    }
    filtered[index % filtered.len()].clone()
}

/// Number of distinct colors `color_for` cycles through for these settings.
#[must_use]
pub fn cycle_len(settings: &ProjectionSettings) -> usize {
    settings
        .sticky_note_colors
        .iter()
        .filter(|color| !color.eq_ignore_ascii_case(&settings.background_color))
        .count()
        .max(1)
}
