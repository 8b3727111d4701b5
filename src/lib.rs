//! TuneMate web client: sign in with a streaming service, then onboard.
//!
//! The crate builds three ways: natively for unit tests (browser glue
//! compiles to inert stubs), as WASM with the `hydrate` feature for the
//! browser, and with the `ssr` feature for the serving binary.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(crate::app::App);
}
