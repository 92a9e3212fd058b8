// lib.rs - Root module for the catalog_admin library
//
// The library holds the whole admin UI: the headless state and controller
// layer (always compiled, testable natively) and the Leptos components
// (compiled with the `ssr` or `hydrate` feature).

/// The web application: models, REST client, state, and UI components
pub mod web_app;

/// WASM entry point for hydration.
///
/// Called by the generated JS glue once the module has loaded in the browser.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    web_app::logging::init_browser_tracing();

    leptos::mount::hydrate_body(web_app::App);
}
