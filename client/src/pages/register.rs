//! Registration page.
//!
//! Password length is checked locally so a too-short password never reaches
//! the network. Success sends the user to the login page; nothing is written
//! to the session here.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::api::{self, RequestError};
use crate::net::types::Credentials;
use crate::util::auth::LOGIN_PATH;

pub const MIN_PASSWORD_LEN: usize = 6;

/// Trim the email and enforce the minimum password length.
pub fn validate_register_input(email: &str, password: &str) -> Result<Credentials, &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Email is required.");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters.");
    }
    Ok(Credentials { email: email.to_owned(), password: password.to_owned() })
}

/// Message shown for a failed registration.
pub fn registration_error_message(err: &RequestError) -> String {
    err.backend_message()
        .filter(|m| !m.trim().is_empty())
        .unwrap_or("Registration failed")
        .to_owned()
}

#[component]
pub fn RegisterPage() -> impl IntoView {
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
        let credentials = match validate_register_input(&email.get_untracked(), &password.get_untracked()) {
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
            match api::register(&credentials).await {
                Ok(()) => {
                    busy.set(false);
                    navigate(LOGIN_PATH, leptos_router::NavigateOptions::default());
                }
                Err(e) => {
                    log::warn!("registration failed: {e}");
                    info.set(registration_error_message(&e));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Products Manager"</h1>
                <p class="login-card__subtitle">"Create an account"</p>
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
                        placeholder="Password (min. 6 characters)"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating…" } else { "Create Account" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message login-message--error">{move || info.get()}</p>
                </Show>
                <p class="login-card__footer">
                    "Already registered? " <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
