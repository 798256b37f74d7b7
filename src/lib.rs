//! # papertools-client
//!
//! Leptos + WASM front end for the PaperTools paper-assistance product:
//! text similarity checking, spell checking, summarization, operation
//! history, and an administrative console for users, logs, and statistics.
//!
//! The similarity/spellcheck/summary computation lives behind backend HTTP
//! endpoints; this crate owns routing and auth gating, bearer-token storage,
//! the HTTP request path (token attach, 401/403 branching), the reactive
//! session store, and the pages themselves.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs panic/console logging hooks and hydrates
/// the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    leptos::mount::hydrate_body(App);
}
