//! Pure helpers extracted from the DOM binding for non-wasm testing.

use slider_core::{SliderConfig, SliderError};

/// Convert `window.innerWidth` into whole CSS pixels.
///
/// Fractional widths round up so a reading just past the breakpoint stays past it.
/// Non-finite or negative readings collapse to 0, which selects the narrow layout.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn viewport_width(inner_width: f64) -> u32 {
    if !inner_width.is_finite() || inner_width <= 0.0 {
        return 0;
    }
    inner_width.min(f64::from(u32::MAX)).ceil() as u32
}

/// Value written to an indicator's `aria-current` attribute.
#[must_use]
pub const fn aria_current(active: bool) -> &'static str {
    if active { "true" } else { "false" }
}

/// Decode a config from the JSON text of a script-supplied object.
///
/// `None` stands for a value `JSON.stringify` could not encode (e.g. `undefined`).
///
/// # Errors
/// Returns [`SliderError::InvalidConfig`] when nothing was supplied or the payload does
/// not decode, and [`SliderError::EmptySectionId`] for a blank section id.
pub fn decode_config(raw: Option<String>) -> Result<SliderConfig, SliderError> {
    let raw = raw.ok_or_else(|| SliderError::InvalidConfig {
        reason: "configuration is not a JSON object".to_string(),
    })?;
    SliderConfig::from_json(&raw)
}

/// Section id from a config payload that may have failed to decode, for log lines.
#[must_use]
pub fn section_hint(raw: Option<&str>) -> String {
    raw.and_then(|text| serde_json::from_str::<serde_json::Value>(text).ok())
        .and_then(|value| match value.get("sectionId") {
            Some(serde_json::Value::String(id)) => Some(id.clone()),
            Some(serde_json::Value::Number(id)) => Some(id.to_string()),
            _ => None,
        })
        .unwrap_or_else(|| "<unknown>".to_string())
}
