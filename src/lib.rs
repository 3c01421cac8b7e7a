#![recursion_limit = "512"]

pub mod app;
pub mod data;
pub mod pages;
#[cfg(feature = "ssr")]
pub mod settings;
pub mod utils;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;

    console_error_panic_hook::set_once();
    pages::love_map::install_marker_icons();
    leptos::mount::hydrate_body(App);
}
