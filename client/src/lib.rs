//! # devfolio-ui
//!
//! Leptos + WASM frontend for the developer portfolio page. The résumé is
//! presented as fake API documentation: collapsible endpoint cards with JSON
//! bodies, a typing `curl` prompt and copy-to-clipboard buttons.
//!
//! This crate contains the page, its components, the transient UI state
//! machines, the static content catalog and the browser adapters (timers,
//! clipboard). The `server` crate renders it with SSR; the `hydrate` feature
//! builds the browser bundle.

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // Fails only when a logger is already installed, which is fine.
    console_log::init_with_level(log::Level::Debug).unwrap_or_default();
    leptos::mount::hydrate_body(app::App);
}
