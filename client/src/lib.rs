//! # gochi-web
//!
//! Leptos frontend for the Gochi landing page.
//!
//! The crate is compiled twice: with `ssr` for the axum host, which renders
//! the anonymous page, and with `hydrate` for the browser, where the session
//! cookie is read once and the page may switch to the welcome state.

pub mod app;
pub mod config;
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
