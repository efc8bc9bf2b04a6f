//! portcullis web front-end.
//!
//! This crate provides the Leptos-based login screen and the Axum server
//! that renders and hydrates it.

#![allow(non_snake_case)]

pub mod app;
pub mod browser;
#[cfg(feature = "ssr")]
pub mod config;
pub mod error;
pub mod pages;
pub mod settings;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
