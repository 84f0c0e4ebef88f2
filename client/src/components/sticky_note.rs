//! One positioned sticky note on the projection surface.

#[cfg(test)]
#[path = "sticky_note_test.rs"]
mod sticky_note_test;

use leptos::prelude::*;
use projection::grid::NotePosition;

/// Inline style for an absolutely positioned note card. Coordinates are in
/// percent of the viewport; the entrance animation itself lives in CSS and
/// keys off the `sticky-note` class.
#[must_use]
pub fn note_style(position: NotePosition, color: &str, font_size: i32) -> String {
    format!(
        "left:{:.2}%;top:{:.2}%;background-color:{color};font-size:{font_size}px;",
        position.x_pct, position.y_pct
    )
}

/// A single note card. The style is a signal because the whole grid
/// repositions as more notes arrive; keeping the DOM node stable means the
/// entrance animation plays once and repositioning becomes a CSS transition.
#[component]
pub fn StickyNote(
    content: String,
    author_name: Option<String>,
    style: Signal<String>,
) -> impl IntoView {
    let text = projection::reveal::display_text(&content);

    view! {
        <div class="sticky-note" style=move || style.get()>
            <p class="sticky-note__content">{text}</p>
            <Show when={
                let author = author_name.clone();
                move || author.is_some()
            }>
                <span class="sticky-note__author">
                    {author_name.clone().unwrap_or_default()}
                </span>
            </Show>
        </div>
    }
}
