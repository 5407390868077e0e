//! # tracker-client
//!
//! Leptos + WASM front end for the supply-chain tracker. Hosts role-based
//! registration, password and wallet-signature login, the dashboard shell,
//! product creation and listing, and the tracking timeline.
//!
//! The session lifecycle lives in [`auth`]: it is written against injected
//! storage, HTTP and signer capabilities so it runs and tests natively, while
//! the browser implementations of those capabilities compile only under the
//! `csr` feature.

pub mod app;
pub mod auth;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs logging and mounts the root component.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("tracker client starting");
    leptos::mount::mount_to_body(app::App);
}
