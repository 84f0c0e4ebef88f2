//! CSV export links for the admin page.

use leptos::prelude::*;
use uuid::Uuid;

/// Download anchors for the message export, one per slice. Plain `<a>` tags;
/// the browser carries the organizer's session cookie and the server sets
/// the filename via its content-disposition header.
#[component]
pub fn ExportButtons(event_id: Uuid) -> impl IntoView {
    let approved_href = crate::net::api::export_csv_url(event_id, "approved");
    let all_href = crate::net::api::export_csv_url(event_id, "all");

    view! {
        <div class="export-buttons">
            <a class="btn btn--export" href=approved_href download="">
                "Export approved (CSV)"
            </a>
            <a class="btn btn--export" href=all_href download="">
                "Export all (CSV)"
            </a>
        </div>
    }
}
