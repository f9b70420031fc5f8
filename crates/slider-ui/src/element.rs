//! Placeholder `<image-text-slider>` custom element.
//!
//! The element carries no behaviour; defining it keeps the storefront markup valid and
//! lets stylesheets match `:defined`.

use gloo::console;
use slider_core::defaults::ELEMENT_TAG;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(inline_js = "
export function define_placeholder_element(tag) {
  if (customElements.get(tag)) {
    return false;
  }
  customElements.define(tag, class extends HTMLElement {});
  return true;
}
")]
extern "C" {
    #[wasm_bindgen(catch)]
    fn define_placeholder_element(tag: &str) -> Result<bool, JsValue>;
}

/// Define the placeholder element unless the page already has it.
///
/// Returns whether this call performed the definition.
pub(crate) fn define_placeholder() -> bool {
    match define_placeholder_element(ELEMENT_TAG) {
        Ok(defined) => defined,
        Err(err) => {
            console::debug!("slider element definition failed", ELEMENT_TAG, err);
            false
        }
    }
}
