/// Media Scraper - browser front-end for the social-media scraping API
/// Built with Rust + WASM + Yew

pub mod api;
pub mod config;
pub mod detectors;
pub mod format;
pub mod route;
pub mod ui;

use wasm_bindgen::prelude::*;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Re-export the URL classifier for JavaScript access
#[wasm_bindgen]
pub fn classify_url(url: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&detectors::classify(url)).map_err(JsValue::from)
}

// Start the Yew app
#[wasm_bindgen]
pub fn start_app() {
    yew::Renderer::<ui::app::App>::new().render();
}
