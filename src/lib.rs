//! # petclinic-ui
//!
//! Leptos + WASM frontend for the pet clinic. Each screen is backed by a
//! view controller that reads records over REST when the route activates
//! and writes them back when the user submits a form. A chat widget posts
//! questions to the GenAI endpoint and renders markdown replies.
//!
//! Browser calls only exist under the `hydrate` feature. Native builds
//! (tests, SSR) compile them to stubs so controller and view-model logic
//! can be exercised without a browser.

pub mod app;
pub mod components;
pub mod config;
pub mod controllers;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

#[cfg(test)]
pub(crate) mod test_support;

/// WASM entry point: install logging and hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    use crate::app::App;
    use leptos::prelude::*;

    let config = config::ApiConfig::from_document();
    leptos::mount::hydrate_body(move || view! { <App config=config/> });
}
