//! Root application component with routing and page metadata.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::content::profile::PROFILE;
use crate::pages::portfolio::PortfolioPage;

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
/// The site is a single page; the router only exists so SSR can enumerate it
/// and unknown paths get a plain fallback.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let title = format!("{} · Developer Portfolio API", PROFILE.name);
    let description = format!("{}, {}. Résumé served as API documentation.", PROFILE.name, PROFILE.title);

    view! {
        <Stylesheet id="leptos" href="/pkg/devfolio.css"/>
        <Title text=title/>
        <Meta name="description" content=description/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=PortfolioPage/>
            </Routes>
        </Router>
    }
}
