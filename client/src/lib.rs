//! # client
//!
//! Leptos + WASM frontend for the Vetor TI marketing site: a single-page
//! application with animated sections, a scripted chat assistant performing
//! keyword-based canned replies, a decorative canvas backdrop (via the
//! `backdrop` crate), and small validation/formatting helpers.

pub mod app;
pub mod chat;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// Client-side entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        leptos::logging::warn!("console logger already initialized");
    }
    leptos::mount::hydrate_body(app::App);
}
