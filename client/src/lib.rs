//! # client
//!
//! Leptos + WASM rendering of the count stepper widget.
//!
//! The value policy lives in the `stepper` crate; this crate binds it to
//! reactive signals, DOM events, and markup. `hydrate()` is the browser entry
//! point and `app::shell` is the SSR document.

pub mod app;
pub mod components;
pub mod util;

/// Browser entry point: install panic/log hooks and hydrate the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
