//! Web UI for recipe-box
//!
//! A Yew-based single page for submitting recipes and browsing the
//! ones already shared, persisted in the browser's localStorage.

mod app;
mod components;
mod files;
pub mod state;
pub mod storage;

use wasm_bindgen::prelude::*;

/// Entry point for the WASM application.
#[wasm_bindgen(start)]
pub fn run_app() {
    // Initialize panic hook for better error messages
    console_error_panic_hook::set_once();

    #[cfg(target_arch = "wasm32")]
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("Logger already initialized: {}", e).into());
    }

    // Mount the Yew app
    yew::Renderer::<app::App>::new().render();
}
