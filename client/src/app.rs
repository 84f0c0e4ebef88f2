//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    admin::AdminPage, dashboard::DashboardPage, events::EventsPage, home::HomePage,
    login::LoginPage, projection::ProjectionPage,
};
use crate::state::auth::AuthState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared auth context and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Starts in the probing state; the probe below resolves it client-side.
    let auth = RwSignal::new(AuthState::probing());
    provide_context(auth);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let organizer = crate::net::api::fetch_current_organizer().await;
        auth.set(AuthState::resolved(organizer));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/stickyboard.css"/>
        <Title text="Stickyboard"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("events") view=EventsPage/>
                <Route
                    path=(StaticSegment("event"), ParamSegment("slug"), StaticSegment("dashboard"))
                    view=DashboardPage
                />
                <Route
                    path=(StaticSegment("event"), ParamSegment("slug"), StaticSegment("admin"))
                    view=AdminPage
                />
                <Route
                    path=(StaticSegment("event"), ParamSegment("slug"), StaticSegment("projection"))
                    view=ProjectionPage
                />
            </Routes>
        </Router>
    }
}
