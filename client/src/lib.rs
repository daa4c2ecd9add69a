//! # leadboard
//!
//! Leptos + WASM frontend for the lead pipeline: a dashboard of lead counts
//! and a kanban board where dragging a card moves the lead to another stage.
//!
//! This crate contains pages, components, application state and the REST
//! client. State modules are plain Rust and testable natively; anything that
//! touches the browser is gated on the `hydrate` feature.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
