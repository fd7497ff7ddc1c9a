//! Top navigation bar: brand, entity links, identity, logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Purely presentational over the session handle and the router location;
//! the only action it owns is logout.

#[cfg(test)]
#[path = "nav_bar_test.rs"]
mod nav_bar_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::session::SessionHandle;
use crate::util::auth::LOGIN_PATH;

/// Links shown in the bar, in order.
pub const NAV_LINKS: &[(&str, &str)] = &[("/products", "Products"), ("/spices", "Spices")];

/// Whether `href` is the section the user is currently in.
pub fn is_active_link(current_path: &str, href: &str) -> bool {
    current_path == href
        || current_path
            .strip_prefix(href)
            .is_some_and(|rest| rest.starts_with('/'))
}

pub fn nav_link_class(current_path: &str, href: &str) -> &'static str {
    if is_active_link(current_path, href) { "nav__link nav__link--active" } else { "nav__link" }
}

#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let location = use_location();
    let navigate = use_navigate();

    let on_logout = move |_| {
        session.logout();
        navigate(LOGIN_PATH, NavigateOptions::default());
    };

    let links = NAV_LINKS
        .iter()
        .map(|&(href, label)| {
            let class = move || nav_link_class(&location.pathname.get(), href);
            view! {
                <a href=href class=class>
                    {label}
                </a>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <nav class="nav">
            <span class="nav__brand">"📦 Products Manager"</span>
            <div class="nav__links">{links}</div>
            <div class="nav__right">
                <Show when=move || session.email().is_some()>
                    <span class="nav__email">{move || session.email().unwrap_or_default()}</span>
                </Show>
                <button class="btn btn--danger nav__logout" on:click=on_logout>
                    "Logout"
                </button>
            </div>
        </nav>
    }
}
