//! Login page: email + password sign-in against the backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! A successful login is the only place besides the nav bar that writes the
//! session. The existing session is left untouched when sign-in fails.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::net::types::{AuthResponse, Credentials};
use crate::state::session::SessionHandle;

/// Where a signed-in user lands.
pub const AFTER_LOGIN_PATH: &str = "/products";

const LOGIN_FAILED: &str = "Invalid email or password";

/// Trim the email and require both fields before any request goes out.
pub fn validate_login_input(email: &str, password: &str) -> Result<Credentials, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok(Credentials { email: email.to_owned(), password: password.to_owned() })
}

/// Token and email to store for a successful login response. The typed
/// email stands in when the backend omits one; a blank token is a failure.
pub fn session_from_response(credentials: &Credentials, auth: AuthResponse) -> Result<(String, String), &'static str> {
    if auth.token.trim().is_empty() {
        return Err(LOGIN_FAILED);
    }
    let email = if auth.email.trim().is_empty() { credentials.email.clone() } else { auth.email };
    Ok((auth.token, email))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let credentials = match validate_login_input(&email.get_untracked(), &password.get_untracked()) {
            Ok(credentials) => credentials,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let outcome = match api::login(&credentials).await {
                Ok(auth) => session_from_response(&credentials, auth),
                Err(e) => {
                    log::warn!("login failed: {e}");
                    Err(LOGIN_FAILED)
                }
            };
            busy.set(false);
            match outcome {
                Ok((token, email)) => {
                    session.login(token, email);
                    navigate(AFTER_LOGIN_PATH, leptos_router::NavigateOptions::default());
                }
                Err(message) => info.set(message.to_owned()),
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Products Manager"</h1>
                <p class="login-card__subtitle">"Sign in to your account"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in…" } else { "Sign In" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message login-message--error">{move || info.get()}</p>
                </Show>
                <p class="login-card__footer">
                    "No account? " <a href="/register">"Create one"</a>
                </p>
            </div>
        </div>
    }
}
