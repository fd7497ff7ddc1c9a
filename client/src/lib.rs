//! # client
//!
//! Leptos + WASM admin console for the products/spices REST backend.
//!
//! This crate contains pages, components, session and list state, the REST
//! API client, and browser storage helpers. The `server` crate renders it on
//! the server (`ssr`); the browser build hydrates it (`hydrate`).

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
