//! # coco-client
//!
//! Leptos + WASM frontend for the CoCo election application: participants log
//! in, watch open elections, and cast one vote per election; admins log in,
//! create elections, and watch the same list read-only.
//!
//! The crate is split the usual way: `state` holds plain, natively testable
//! state machines; `net` talks to the backend; `components` and `pages`
//! render; `util` wraps browser concerns (cookies, navigation, polling).
//! Browser-only code is gated behind the `csr` feature.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/console logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn mount() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console logger unavailable: {e}").into());
    }
    leptos::mount::mount_to_body(app::App);
}
