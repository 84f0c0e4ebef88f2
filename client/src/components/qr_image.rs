//! QR code image pointing attendees at the join URL.

use leptos::prelude::*;

/// The join-URL QR code, rendered server-side as SVG and loaded like any
/// other image.
#[component]
pub fn QrImage(slug: String) -> impl IntoView {
    let src = crate::net::api::qr_svg_url(&slug);
    view! {
        <img
            class="qr-image"
            src=src
            alt="QR code linking to the attendee page"
            width="200"
            height="200"
        />
    }
}
