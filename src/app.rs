//! Application shell: document skeleton, router, and global context.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::pages::login::LoginPage;
use crate::pages::onboarding::OnboardingPage;
use crate::util::session::SessionStore;
use crate::util::theme;

/// HTML document wrapper used by server rendering and hydration.
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

/// Root component: provides the session store and mounts the routes.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(SessionStore::browser());

    // Stamp the color theme once the app is live in the browser.
    Effect::new(move || theme::bootstrap());

    view! {
        <Stylesheet id="leptos" href="/pkg/tunemate.css"/>
        <Title text="TuneMate"/>
        <Router>
            <main class="app-shell">
                <Routes fallback=|| view! { <p class="route-missing">"Page not found."</p> }>
                    <Route path=path!("/") view=LoginPage/>
                    <Route path=path!("/onboarding") view=OnboardingPage/>
                </Routes>
            </main>
        </Router>
    }
}
