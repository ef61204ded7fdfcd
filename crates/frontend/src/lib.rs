//! Equipment checkout console.
//!
//! The engine (`shared`, `domain`, `layout::view_controller`) is plain Rust and
//! testable without a browser; `app` and the `layout` components are a thin
//! Leptos shell on top of it.

pub mod app;
pub mod domain;
pub mod layout;
pub mod shared;

use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(app::App);
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
