//! Itemdeck - authenticated item list manager
//!
//! A single-page application for managing a personal list of items behind a
//! token-issuing REST API, built with Leptos and WebAssembly.

#![recursion_limit = "1024"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
