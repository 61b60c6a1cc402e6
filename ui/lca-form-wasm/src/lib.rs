//! LCA Predictor form, compiled to WASM.
//!
//! Binds the prediction form in `index.html`: API address handling, "other"
//! free-text fallbacks, validation, the `/predict` call, and result cards.
//! DOM-free logic lives in the `lca-form` crate.

pub mod api;
pub mod dom;
pub mod endpoint;
pub mod events;
pub mod other;
pub mod state;
pub mod submit;

use wasm_bindgen::prelude::*;

/// WASM entry point – called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Improve panic messages in the browser console
    console_error_panic_hook::set_once();

    init()
}

fn init() -> Result<(), JsValue> {
    let els = dom::Elements::bind()?;

    let address = endpoint::init_endpoint(&els);
    gloo_console::log!("prediction API:", address);

    events::bind_events(&els)
}
