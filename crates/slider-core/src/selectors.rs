//! Class names and attributes that make up the slider's DOM contract.

/// Ancestor wrapping the viewport and its navigation buttons.
pub const CONTAINER_CLASS: &str = "image-text-slider__slider-container";
/// Previous-page button inside the container.
pub const PREV_BUTTON_CLASS: &str = "image-text-slider__nav-button--prev";
/// Next-page button inside the container.
pub const NEXT_BUTTON_CLASS: &str = "image-text-slider__nav-button--next";
/// Indicator dot inside the indicators container.
pub const INDICATOR_CLASS: &str = "image-text-slider__indicator";
/// Class toggled on the indicator of the current page.
pub const ACTIVE_CLASS: &str = "active";
/// Accessibility attribute mirrored onto each indicator.
pub const ARIA_CURRENT: &str = "aria-current";

/// Prefix of the viewport element id (`slider-{section}`).
pub const VIEWPORT_ID_PREFIX: &str = "slider-";
/// Prefix of the indicators container id (`indicators-{section}`).
pub const INDICATORS_ID_PREFIX: &str = "indicators-";

/// CSS selector matching a single class name.
#[must_use]
pub fn class_selector(class: &str) -> String {
    format!(".{class}")
}
