//! # orizu-client
//!
//! Leptos + WASM frontend for the Orizu chat client prototype.
//!
//! This crate contains the auth and home pages, their components, view-state
//! models with client-side validation, the mock auth transport, and browser
//! helpers. The `server` crate renders it with SSR and serves the hydrate
//! bundle.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
