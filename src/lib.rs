//! # clockfolio
//!
//! Leptos + WASM frontend for a single-page portfolio.
//!
//! The page is driven by a circular clock control: the hand follows the
//! section under the scroll position, and pointing at the dial (or hovering the
//! section menu) moves it directly. Content blocks fade in as they scroll into
//! view, and the contact form delivers messages through EmailJS, reporting the
//! result in a modal.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod state;
pub mod util;

/// WASM entry point: install the panic hook and logger, then mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
