//! Shoe Storefront - Main Entry Point
//!
//! Launches the Dioxus application; the platform is selected by cargo
//! features (`web` for the browser bundle, `desktop` for a native window).

use shoe_storefront::app::App;

// WASM entry point (browser)
#[cfg(target_arch = "wasm32")]
fn main() {
    // Log to browser console to confirm WASM loaded
    web_sys::console::log_1(&"[WASM] Shoe Storefront initialized".into());
    dioxus::launch(App);
}

// Native entry point (desktop window / dx serve)
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    // Initialize tracing BEFORE launching the app
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting Shoe Storefront...");

    dioxus::launch(App);
}
