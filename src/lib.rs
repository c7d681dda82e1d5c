//! # thumbboard
//!
//! Leptos + WASM client for the thumbnail board service. Users sign in,
//! manage named boards, and collect video thumbnails with client-side
//! filtering and locally toggled feature flags.
//!
//! ARCHITECTURE
//! ============
//! `net` talks to the REST backend, `state` owns the explicit application
//! state, `render` projects that state into markup, and `controller` ties a
//! user action to its remote call and state update. `app`, `pages`, and
//! `components` are the Leptos shell that mounts it all in the browser.

pub mod app;
pub mod components;
pub mod config;
pub mod controller;
pub mod error;
pub mod net;
pub mod pages;
pub mod render;
pub mod state;
pub mod util;

/// Browser entry point: install logging and mount the app on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
