//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected pages apply identical unauthenticated redirect behavior.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::SessionHandle;

/// Entry point for signed-out users.
pub const LOGIN_PATH: &str = "/login";

/// Whether a guarded page should leave for the login page. Nothing is decided
/// until persisted state has been read.
pub fn should_redirect_unauth(restored: bool, authenticated: bool) -> bool {
    restored && !authenticated
}

/// Redirect to `/login` whenever the session is restored and absent.
pub fn install_unauth_redirect<F>(session: SessionHandle, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(session.is_restored(), session.is_authenticated()) {
            navigate(LOGIN_PATH, NavigateOptions::default());
        }
    });
}
