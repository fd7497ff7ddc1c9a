//! Root application component with routing and the session context.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::pages::{login::LoginPage, products::ProductsPage, register::RegisterPage, spices::SpicesPage};
use crate::state::session::SessionHandle;

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
/// Owns the single `SessionHandle`. Persisted credentials are read after
/// hydration so server and client render the same first frame.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionHandle::new();
    provide_context(session);
    Effect::new(move || session.restore());

    view! {
        <Stylesheet id="leptos" href="/pkg/products-manager.css"/>
        <Title text="Products Manager"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("products") view=ProductsPage/>
                <Route path=StaticSegment("spices") view=SpicesPage/>
                <Route path=StaticSegment("") view=|| view! { <Redirect path="/products"/> }/>
            </Routes>
        </Router>
    }
}
