//! WASM application wiring
//!
//! Entry point for the browser build: wires the quiz form's submit listener
//! on load. The enrollment listener is attached later, each time the courses
//! region is re-rendered with a fresh form.

use wasm_bindgen::prelude::*;

use crate::error::Result;
use crate::page::DomPage;

/// Hook the landing page up. Exposed for host pages that re-initialize
/// after swapping markup in.
#[wasm_bindgen]
pub fn init_landing() -> core::result::Result<(), JsValue> {
    init().map_err(|error| JsValue::from_str(&error.to_string()))
}

fn init() -> Result<()> {
    let page = DomPage::new()?;

    if !page.bind_quiz_form() {
        // routes without the quiz form share this bundle
        log::debug!("quiz form not present on this page");
    }

    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    if let Err(error) = init() {
        log::error!("landing initialization failed: {error}");
    }
}
