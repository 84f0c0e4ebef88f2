//! Projection settings editor for the admin page.

#[cfg(test)]
#[path = "settings_editor_test.rs"]
mod settings_editor_test;

use leptos::prelude::*;
use model::StoredSettings;
use uuid::Uuid;

/// Parse the palette textarea: one color per comma, blanks dropped. Returns
/// `None` when no usable entries remain, so the event falls back to the
/// default palette instead of storing an empty list.
#[must_use]
pub fn parse_palette_input(raw: &str) -> Option<Vec<String>> {
    let colors: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_owned)
        .collect();
    (!colors.is_empty()).then_some(colors)
}

/// Format a stored palette back into the editable comma form.
#[must_use]
pub fn format_palette(colors: Option<&[String]>) -> String {
    colors.map(|c| c.join(", ")).unwrap_or_default()
}

/// Build the settings payload from the editor's raw field values. Blank
/// fields become `None` so the projection page resolves its defaults.
#[must_use]
pub fn build_settings(title: &str, background: &str, font_size: &str, palette: &str) -> StoredSettings {
    let non_blank = |s: &str| {
        let s = s.trim();
        (!s.is_empty()).then(|| s.to_owned())
    };
    StoredSettings {
        title: non_blank(title),
        background_color: non_blank(background),
        font_size: font_size.trim().parse::<i32>().ok().filter(|size| *size > 0),
        sticky_note_colors: parse_palette_input(palette),
    }
}

/// Editor card for one event's projection settings. Loads the stored row
/// into its fields once and saves the whole row on submit (the server
/// upserts by event).
#[component]
pub fn SettingsEditor(event_id: Uuid, initial: StoredSettings) -> impl IntoView {
    let title = RwSignal::new(initial.title.clone().unwrap_or_default());
    let background = RwSignal::new(initial.background_color.clone().unwrap_or_default());
    let font_size = RwSignal::new(
        initial
            .font_size
            .map(|size| size.to_string())
            .unwrap_or_default(),
    );
    let palette = RwSignal::new(format_palette(initial.sticky_note_colors.as_deref()));
    let info = RwSignal::new(String::new());

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let settings = build_settings(&title.get(), &background.get(), &font_size.get(), &palette.get());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::save_settings(event_id, &settings).await {
                Ok(_) => info.set("Saved.".to_owned()),
                Err(message) => info.set(message),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (event_id, settings);
    };

    view! {
        <form class="settings-editor" on:submit=on_save>
            <h3>"Projection settings"</h3>
            <label class="settings-editor__field">
                "Title"
                <input
                    type="text"
                    placeholder="Defaults to \"<event> - Ideas Board\""
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
            </label>
            <label class="settings-editor__field">
                "Background color"
                <input
                    type="text"
                    placeholder="#ffffff"
                    prop:value=move || background.get()
                    on:input=move |ev| background.set(event_target_value(&ev))
                />
            </label>
            <label class="settings-editor__field">
                "Font size (px)"
                <input
                    type="number"
                    min="8"
                    placeholder="18"
                    prop:value=move || font_size.get()
                    on:input=move |ev| font_size.set(event_target_value(&ev))
                />
            </label>
            <label class="settings-editor__field">
                "Note colors (comma separated)"
                <input
                    type="text"
                    placeholder="#fef3c7, #fce7f3, #dbeafe, #d1fae5, #fed7aa"
                    prop:value=move || palette.get()
                    on:input=move |ev| palette.set(event_target_value(&ev))
                />
            </label>
            <button class="btn btn--primary" type="submit">"Save"</button>
            <Show when=move || !info.get().is_empty()>
                <span class="settings-editor__message">{move || info.get()}</span>
            </Show>
        </form>
    }
}
