//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::landing::LandingPage;
use crate::state::timetable::TimetableState;

pub const SITE_TITLE: &str = "かもめ会議2024";
pub const SITE_DESCRIPTION: &str = "かもめ会議 2024 - 新たな視点で、ビジネスの未来を描く";

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="ja">
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
/// Provides the timetable expansion state and mounts the landing page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let timetable = RwSignal::new(TimetableState::default());
    provide_context(timetable);

    view! {
        <Stylesheet id="leptos" href="/pkg/kamome.css"/>
        <Title text=SITE_TITLE/>
        <Meta name="description" content=SITE_DESCRIPTION/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LandingPage/>
            </Routes>
        </Router>
    }
}
