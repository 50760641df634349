//! # yalama-client
//!
//! Leptos frontend for the Yalama International marketing site: a single page
//! with a product catalog, HS code table, auto-scrolling gallery, and a
//! `mailto:` contact form.
//!
//! Rendered on the server with the `ssr` feature and hydrated in the browser
//! with the `hydrate` feature.

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach to the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("hydrating yalama-client");
    leptos::mount::hydrate_body(app::App);
}
