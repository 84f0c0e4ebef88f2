use super::*;

#[test]
fn parse_palette_input_splits_trims_and_drops_blanks() {
    assert_eq!(
        parse_palette_input(" #fef3c7, #fce7f3 ,, "),
        Some(vec!["#fef3c7".to_owned(), "#fce7f3".to_owned()])
    );
}

#[test]
fn parse_palette_input_returns_none_for_no_entries() {
    assert_eq!(parse_palette_input(""), None);
    assert_eq!(parse_palette_input(" , , "), None);
}

#[test]
fn format_palette_round_trips_the_comma_form() {
    let colors = vec!["#dbeafe".to_owned(), "#d1fae5".to_owned()];
    let formatted = format_palette(Some(&colors));
    assert_eq!(formatted, "#dbeafe, #d1fae5");
    assert_eq!(parse_palette_input(&formatted), Some(colors));
}

#[test]
fn build_settings_blank_fields_become_none() {
    let settings = build_settings("  ", "", "", "");
    assert_eq!(settings, StoredSettings::default());
}

#[test]
fn build_settings_parses_font_size_and_rejects_nonpositive() {
    assert_eq!(build_settings("", "", "24", "").font_size, Some(24));
    assert_eq!(build_settings("", "", "0", "").font_size, None);
    assert_eq!(build_settings("", "", "big", "").font_size, None);
}

#[test]
fn build_settings_carries_trimmed_values() {
    let settings = build_settings(" Wall of Ideas ", " #E6F3FF ", "18", "#fef3c7");
    assert_eq!(settings.title, Some("Wall of Ideas".to_owned()));
    assert_eq!(settings.background_color, Some("#E6F3FF".to_owned()));
    assert_eq!(settings.sticky_note_colors, Some(vec!["#fef3c7".to_owned()]));
}
