//! Element handles for one slider, resolved once from the document.

use gloo::console;
use slider_core::selectors::{
    ACTIVE_CLASS, ARIA_CURRENT, CONTAINER_CLASS, INDICATOR_CLASS, NEXT_BUTTON_CLASS,
    PREV_BUTTON_CLASS, class_selector,
};
use slider_core::{DomIds, SliderError, SliderSurface};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

use crate::logic::aria_current;

/// Owned handles to every element a slider touches.
pub(crate) struct DomSurface {
    track: HtmlElement,
    prev: Option<Element>,
    next: Option<Element>,
    indicators: Vec<Element>,
}

/// Elements that receive event listeners; cloned out before the surface moves into the
/// controller.
pub(crate) struct ListenerTargets {
    pub(crate) track: HtmlElement,
    pub(crate) prev: Option<Element>,
    pub(crate) next: Option<Element>,
    pub(crate) indicators: Vec<Element>,
}

impl DomSurface {
    /// Look up the viewport, navigation buttons and indicators for `ids`.
    ///
    /// Buttons and indicators are optional; a missing or empty viewport is an error.
    pub(crate) fn resolve(document: &Document, ids: &DomIds) -> Result<Self, SliderError> {
        let track = document
            .get_element_by_id(&ids.viewport)
            .and_then(|element| element.dyn_into::<HtmlElement>().ok())
            .ok_or_else(|| SliderError::MissingViewport {
                id: ids.viewport.clone(),
            })?;
        if track.child_element_count() == 0 {
            return Err(SliderError::EmptyViewport {
                id: ids.viewport.clone(),
            });
        }

        let container = track
            .closest(&class_selector(CONTAINER_CLASS))
            .ok()
            .flatten();
        let prev = container
            .as_ref()
            .and_then(|container| find_first(container, PREV_BUTTON_CLASS));
        let next = container
            .as_ref()
            .and_then(|container| find_first(container, NEXT_BUTTON_CLASS));
        let indicators = document
            .get_element_by_id(&ids.indicators)
            .map(|container| find_all(&container, INDICATOR_CLASS))
            .unwrap_or_default();

        Ok(Self {
            track,
            prev,
            next,
            indicators,
        })
    }

    pub(crate) fn listener_targets(&self) -> ListenerTargets {
        ListenerTargets {
            track: self.track.clone(),
            prev: self.prev.clone(),
            next: self.next.clone(),
            indicators: self.indicators.clone(),
        }
    }
}

impl SliderSurface for DomSurface {
    fn slide_count(&self) -> usize {
        self.track.child_element_count() as usize
    }

    fn indicator_count(&self) -> usize {
        self.indicators.len()
    }

    fn set_track_width(&self, width: &str) {
        report("width", self.track.style().set_property("width", width));
    }

    fn set_track_transform(&self, transform: &str) {
        report(
            "transform",
            self.track.style().set_property("transform", transform),
        );
    }

    fn set_indicator_active(&self, index: usize, active: bool) {
        let Some(indicator) = self.indicators.get(index) else {
            return;
        };
        report(
            "indicator class",
            indicator
                .class_list()
                .toggle_with_force(ACTIVE_CLASS, active)
                .map(|_| ()),
        );
        report(
            "indicator aria",
            indicator.set_attribute(ARIA_CURRENT, aria_current(active)),
        );
    }
}

fn find_first(scope: &Element, class: &str) -> Option<Element> {
    scope.query_selector(&class_selector(class)).ok().flatten()
}

fn find_all(scope: &Element, class: &str) -> Vec<Element> {
    let Ok(nodes) = scope.query_selector_all(&class_selector(class)) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|index| nodes.get(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn report(operation: &'static str, result: Result<(), JsValue>) {
    if let Err(err) = result {
        console::debug!("slider dom write failed", operation, err);
    }
}
