//! # kamome-client
//!
//! Leptos + WASM frontend for the かもめ会議 2024 landing page.
//!
//! The crate renders on the server (`ssr` feature) and hydrates in the
//! browser (`hydrate` feature). It contains the static schedule, the
//! countdown engine, per-session detail state, the page sections, and the
//! `WaveBackdrop` bridge to the `seascape` canvas crate.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
