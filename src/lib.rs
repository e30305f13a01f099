pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod hooks;
pub mod parser;
pub mod router;
pub mod session;
pub mod types;
pub mod validation;

use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::config::CONFIG;

#[wasm_bindgen(start)]
pub fn run_app() {
    console_error_panic_hook::set_once();
    if CONFIG.enable_logging {
        wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    }
    log::info!("starting travel booking client against {}", CONFIG.api_base_url);

    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id("root"));
    match root {
        Some(root) => {
            yew::Renderer::<App>::with_root(root).render();
        }
        None => {
            log::warn!("#root not found, mounting on <body>");
            yew::Renderer::<App>::new().render();
        }
    }
}
