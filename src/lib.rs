//! Docuvault - Document & Folder Manager
//!
//! A browser client for an authenticated document backend: folder tree
//! navigation, paginated document listings, uploads/downloads, and
//! AI-generated summaries and diagrams. Built with Leptos and WebAssembly.

#![recursion_limit = "2048"]

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
