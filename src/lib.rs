//! # becas-client
//!
//! Leptos + WASM frontend for the university scholarship-management system.
//! The screens are thin CRUD views over the REST backend; the load-bearing
//! part is the session/authorization layer: bearer-token decoding, expiry
//! checking, and role-scoped navigation guards backed by browser storage.

pub mod app;
pub mod auth;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
