//! # sqlchat
//!
//! Leptos + WASM frontend for an AI-assisted SQL chat: sign-in screens, a
//! chat workspace with conversation history, schema editor and discovered
//! databases, a message thread, and chart views of query results.
//!
//! Chart geometry lives in the `charts` crate; this crate owns pages,
//! components, client state and the HTTP boundary.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install the panic hook and console logger, then
/// hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    std::panic::set_hook(Box::new(|info| {
        console_error_panic_hook::hook(info);
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message("Something went wrong. Please reload the page.");
        }
    }));

    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if console_log::init_with_level(level).is_err() {
        leptos::logging::warn!("console logger already installed");
    }

    leptos::mount::hydrate_body(app::App);
}
