//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session is a bearer token plus the email it was issued for, kept in
//! browser storage under two fixed keys. Nothing here inspects the token;
//! an expired one is only noticed when the backend rejects a request.
//!
//! DESIGN
//! ======
//! `SessionStore` is the plain model and owns all storage writes.
//! `SessionHandle` wraps it in a signal for the component tree and is the
//! only writer: components receive it through context and may call
//! `login`/`logout`, everything else is read access.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::util::storage::{KeyValueStore, LocalStorage};

/// Storage key for the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage key for the identity label.
pub const EMAIL_KEY: &str = "email";

/// Credential and identity of the signed-in user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub email: String,
}

/// Session model persisted through a `KeyValueStore`.
#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    storage: S,
    session: Option<Session>,
    restored: bool,
}

impl<S: KeyValueStore> SessionStore<S> {
    /// Empty store that has not read persisted state yet.
    pub fn new(storage: S) -> Self {
        Self { storage, session: None, restored: false }
    }

    /// Store restored from whatever `storage` already holds. The app itself
    /// restores after hydration via `SessionHandle::restore`.
    #[cfg(test)]
    pub fn load(storage: S) -> Self {
        let mut store = Self::new(storage);
        store.restore();
        store
    }

    /// Re-read the persisted token and email.
    pub fn restore(&mut self) {
        let token = self.storage.get_item(TOKEN_KEY).filter(|t| !t.is_empty());
        let email = self.storage.get_item(EMAIL_KEY).unwrap_or_default();
        self.session = token.map(|token| Session { token, email });
        self.restored = true;
    }

    /// Persist and activate a session.
    pub fn login(&mut self, token: impl Into<String>, email: impl Into<String>) {
        let session = Session { token: token.into(), email: email.into() };
        self.storage.set_item(TOKEN_KEY, &session.token);
        self.storage.set_item(EMAIL_KEY, &session.email);
        self.session = Some(session);
        self.restored = true;
    }

    /// Clear the session and its persisted entries. Safe to repeat.
    pub fn logout(&mut self) {
        self.storage.remove_item(TOKEN_KEY);
        self.storage.remove_item(EMAIL_KEY);
        self.session = None;
        self.restored = true;
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }

    pub fn email(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.email.as_str()).filter(|e| !e.is_empty())
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some_and(|t| !t.is_empty())
    }

    /// Whether persisted state has been read (or superseded by login/logout).
    pub fn is_restored(&self) -> bool {
        self.restored
    }
}

/// Reactive session shared through Leptos context.
#[derive(Clone, Copy)]
pub struct SessionHandle {
    store: RwSignal<SessionStore<LocalStorage>>,
}

impl SessionHandle {
    pub fn new() -> Self {
        Self { store: RwSignal::new(SessionStore::new(LocalStorage)) }
    }

    /// Load the persisted session. Call once the app runs in the browser.
    pub fn restore(&self) {
        self.store.update(SessionStore::restore);
    }

    pub fn login(&self, token: String, email: String) {
        log::info!("signed in as {email}");
        self.store.update(|s| s.login(token, email));
    }

    pub fn logout(&self) {
        self.store.update(SessionStore::logout);
    }

    pub fn is_authenticated(&self) -> bool {
        self.store.with(SessionStore::is_authenticated)
    }

    pub fn is_restored(&self) -> bool {
        self.store.with(SessionStore::is_restored)
    }

    pub fn email(&self) -> Option<String> {
        self.store.with(|s| s.email().map(str::to_owned))
    }

    /// Current token without subscribing the caller to session changes.
    pub fn token_untracked(&self) -> Option<String> {
        self.store.with_untracked(|s| s.token().map(str::to_owned))
    }
}

impl Default for SessionHandle {
    fn default() -> Self {
        Self::new()
    }
}
