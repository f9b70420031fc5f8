//! Script-facing surface: the `ImageTextSlider` constructor and a host-owned registry.

use gloo::console;
use slider_core::SliderRegistry;
use wasm_bindgen::prelude::*;

use crate::element;
use crate::instance::{DomController, SliderInstance};
use crate::logic::{decode_config, section_hint};

#[wasm_bindgen(start)]
fn start() {
    console_error_panic_hook::set_once();
    element::define_placeholder();
}

/// Define the `<image-text-slider>` placeholder element.
///
/// Returns `false` when the page had already defined it.
#[wasm_bindgen(js_name = registerSliderElements)]
#[must_use]
pub fn register_slider_elements() -> bool {
    element::define_placeholder()
}

/// One slider bound to the markup of a section.
///
/// Construction never throws: missing markup or a bad config yields an inert slider
/// whose methods do nothing.
#[wasm_bindgen]
pub struct ImageTextSlider {
    instance: Option<SliderInstance>,
}

#[wasm_bindgen]
impl ImageTextSlider {
    /// Mount a slider for `{ sectionId, autoRotate, autoRotateSpeed }`.
    #[wasm_bindgen(constructor)]
    #[must_use]
    #[allow(clippy::needless_pass_by_value)]
    pub fn new(config: JsValue) -> Self {
        Self {
            instance: mount_from_js(&config),
        }
    }

    /// Whether the slider found its markup and is live.
    #[wasm_bindgen(getter)]
    #[must_use]
    pub fn active(&self) -> bool {
        self.instance.is_some()
    }

    /// Advance one page.
    pub fn next(&self) {
        self.with(DomController::next);
    }

    /// Step back one page.
    pub fn prev(&self) {
        self.with(DomController::prev);
    }

    /// Jump to `index`; negative goes to the last page, past the end to the first.
    #[wasm_bindgen(js_name = goTo)]
    pub fn go_to(&self, index: i32) {
        self.with(|controller| controller.go_to(i64::from(index)));
    }

    /// (Re)start the rotation timer.
    #[wasm_bindgen(js_name = startAutoRotate)]
    pub fn start_auto_rotate(&self) {
        self.with(DomController::start_auto_rotate);
    }

    /// Cancel the rotation timer.
    #[wasm_bindgen(js_name = stopAutoRotate)]
    pub fn stop_auto_rotate(&self) {
        self.with(DomController::stop_auto_rotate);
    }

    /// Current state as a plain object, or `null` when inert.
    #[must_use]
    pub fn state(&self) -> JsValue {
        self.instance
            .as_ref()
            .and_then(SliderInstance::snapshot)
            .map_or(JsValue::NULL, |snapshot| to_js(&snapshot))
    }

    /// Detach listeners and stop rotation; the slider is inert afterwards.
    pub fn destroy(&mut self) {
        if let Some(mut instance) = self.instance.take() {
            instance.destroy();
        }
    }
}

impl ImageTextSlider {
    fn with(&self, action: impl FnOnce(&mut DomController)) {
        if let Some(instance) = &self.instance {
            instance.with(action);
        }
    }
}

/// Registry of sliders mounted by one host script.
#[wasm_bindgen]
pub struct SliderHost {
    registry: SliderRegistry<SliderInstance>,
}

impl Default for SliderHost {
    fn default() -> Self {
        let mut registry = SliderRegistry::new();
        if registry.claim_element_definition() {
            element::define_placeholder();
        }
        Self { registry }
    }
}

#[wasm_bindgen]
impl SliderHost {
    /// Empty host; defines the placeholder element if needed.
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount a slider, replacing any slider already mounted for the same section.
    ///
    /// Returns whether the slider came up live.
    #[allow(clippy::needless_pass_by_value)]
    pub fn mount(&mut self, config: JsValue) -> bool {
        let Some(instance) = mount_from_js(&config) else {
            return false;
        };
        let section_id = instance.section_id().to_string();
        if let Some(mut previous) = self.registry.mount(section_id, instance) {
            previous.destroy();
        }
        true
    }

    /// Tear down the slider for `section_id`; returns whether one was mounted.
    pub fn unmount(&mut self, section_id: &str) -> bool {
        self.registry
            .unmount(section_id)
            .map(|mut instance| instance.destroy())
            .is_some()
    }

    /// State of the slider for `section_id`, or `null`.
    #[must_use]
    pub fn state(&self, section_id: &str) -> JsValue {
        self.registry
            .get(section_id)
            .and_then(SliderInstance::snapshot)
            .map_or(JsValue::NULL, |snapshot| to_js(&snapshot))
    }

    /// Mounted section ids, sorted.
    #[wasm_bindgen(js_name = sectionIds)]
    #[must_use]
    pub fn section_ids(&self) -> js_sys::Array {
        self.registry.section_ids().map(JsValue::from_str).collect()
    }

    /// Number of mounted sliders.
    #[wasm_bindgen(getter)]
    #[must_use]
    pub fn size(&self) -> usize {
        self.registry.len()
    }

    /// Tear down every mounted slider.
    pub fn clear(&mut self) {
        self.registry.clear();
    }
}

fn mount_from_js(config: &JsValue) -> Option<SliderInstance> {
    let raw = js_sys::JSON::stringify(config)
        .ok()
        .and_then(|text| text.as_string());
    let mounted =
        decode_config(raw.clone()).and_then(|config| SliderInstance::mount(&config));
    match mounted {
        Ok(instance) => Some(instance),
        Err(err) => {
            console::debug!(
                "slider inert",
                section_hint(raw.as_deref()),
                err.kind(),
                err.to_string()
            );
            None
        }
    }
}

fn to_js<T: serde::Serialize>(value: &T) -> JsValue {
    serde_json::to_string(value)
        .ok()
        .and_then(|text| js_sys::JSON::parse(&text).ok())
        .unwrap_or(JsValue::NULL)
}
