//! # client
//!
//! Leptos + WASM frontend for browsing agent trajectories.
//!
//! Cards are derived by the `trajectories` crate; this crate turns them into
//! DOM, owns the per-card UI state (expansion, copy confirmation) and renders
//! markdown fields with syntax-highlighted code fences.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrates the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
