#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod app;
pub mod audio;
pub mod components;
pub mod confetti;
pub mod dom;
pub mod i18n;
#[cfg(test)]
mod i18n_tests;
pub mod logger;
pub mod paths;
pub mod router;
pub mod storage;
pub mod theme;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    if logger::init().is_err() {
        dom::console_error("logger already installed");
    }
    // Apply the saved language to <html lang> before the first render
    crate::i18n::set_lang(crate::i18n::current_lang());
    yew::Renderer::<app::App>::new().render();
}
