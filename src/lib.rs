mod app;

pub mod catalog;
pub mod components;
pub mod config;
pub mod error;
pub mod estimate;
pub mod layout;
pub mod scene;
pub mod types;

use app::App;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn run_app() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("kitchen configurator starting");
    yew::Renderer::<App>::new().render();
}
