//! # client
//!
//! Leptos + WASM frontend for the Skillbranch marketing and course-catalog
//! site. Public pages render static catalog data (assessments, sandbox
//! playgrounds, FAQ) and one remote-backed list (services).
//!
//! This crate contains pages, components, application state, the REST
//! helpers, and the hand-authored catalog data. It is compiled twice: with
//! `ssr` for server-side rendering inside the `server` crate, and with
//! `hydrate` as the browser WASM bundle.

pub mod app;
pub mod catalog;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
