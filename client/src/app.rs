//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{A, Route, Router, Routes},
};

use crate::components::notice_tray::NoticeTray;
use crate::net::config::ApiConfig;
use crate::pages::{dashboard::DashboardPage, leads::LeadsPage};
use crate::state::{kanban::KanbanState, notices::NoticesState, ui::UiState};

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
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(ApiConfig::from_build_env());
    provide_context(RwSignal::new(KanbanState::default()));
    provide_context(RwSignal::new(UiState::default()));
    provide_context(RwSignal::new(NoticesState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/leadboard.css"/>
        <Title text="Leadboard"/>

        <Router>
            <nav class="sidebar">
                <A href="/">"Dashboard"</A>
                <A href="/leads">"Leads"</A>
            </nav>
            <main class="main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=DashboardPage/>
                    <Route path=StaticSegment("leads") view=LeadsPage/>
                </Routes>
            </main>
            <NoticeTray/>
        </Router>
    }
}
