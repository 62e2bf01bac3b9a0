use leptos::logging::log;
use leptos::mount::mount_to_body;
use wasm_bindgen::prelude::*;

pub mod app;
pub mod components;
pub mod content;
pub mod host;
pub mod pages;
pub mod state;

pub use crate::app::App;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    log!("mounting portfolio");
    mount_to_body(App);
}
