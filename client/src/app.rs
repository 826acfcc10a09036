//! Root application component with routing.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::trajectories::TrajectoriesPage;
use crate::util::clock::viewer_clock;

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
/// Provides the viewer's clock so every card formats times in local time.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(viewer_clock());

    view! {
        <Stylesheet id="leptos" href="/pkg/trajview.css"/>
        <Title text="Trajectories"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=TrajectoriesPage/>
            </Routes>
        </Router>
    }
}
