//! Slider construction options and the element ids derived from them.
//!
//! # Design
//! - Field names follow the camelCase object the storefront passes in
//!   (`{ sectionId, autoRotate, autoRotateSpeed }`).
//! - Optional fields stay optional on the wire; accessors apply defaults so a `null`,
//!   missing, or zero speed all fall back to [`defaults::AUTO_ROTATE_SPEED_MS`].

use std::time::Duration;

use serde::{Deserialize, Deserializer, Serialize};

use crate::defaults;
use crate::error::SliderError;
use crate::selectors::{INDICATORS_ID_PREFIX, VIEWPORT_ID_PREFIX};

/// Options accepted when constructing a slider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SliderConfig {
    /// Section identifier shared by every element of this slider.
    #[serde(deserialize_with = "deserialize_section_id")]
    pub section_id: String,
    /// Whether pages advance on a timer.
    #[serde(default)]
    pub auto_rotate: Option<bool>,
    /// Timer interval in milliseconds.
    #[serde(default)]
    pub auto_rotate_speed: Option<u32>,
}

impl SliderConfig {
    /// Config for `section_id` with auto-rotation disabled.
    #[must_use]
    pub fn new(section_id: impl Into<String>) -> Self {
        Self {
            section_id: section_id.into(),
            auto_rotate: None,
            auto_rotate_speed: None,
        }
    }

    /// Enable or disable auto-rotation.
    #[must_use]
    pub const fn with_auto_rotate(mut self, enabled: bool) -> Self {
        self.auto_rotate = Some(enabled);
        self
    }

    /// Override the auto-rotate interval.
    #[must_use]
    pub const fn with_auto_rotate_speed(mut self, speed_ms: u32) -> Self {
        self.auto_rotate_speed = Some(speed_ms);
        self
    }

    /// Decode a config from its JSON form and validate it.
    ///
    /// # Errors
    /// Returns [`SliderError::InvalidConfig`] when the payload does not decode, or
    /// [`SliderError::EmptySectionId`] when the section id is blank.
    pub fn from_json(raw: &str) -> crate::Result<Self> {
        let config: Self =
            serde_json::from_str(raw).map_err(|err| SliderError::InvalidConfig {
                reason: err.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Check invariants the decoder cannot express.
    ///
    /// # Errors
    /// Returns [`SliderError::EmptySectionId`] when the section id is blank.
    pub fn validate(&self) -> crate::Result<()> {
        if self.section_id.trim().is_empty() {
            return Err(SliderError::EmptySectionId);
        }
        Ok(())
    }

    /// Whether auto-rotation was requested.
    #[must_use]
    pub fn auto_rotate_enabled(&self) -> bool {
        self.auto_rotate.unwrap_or(false)
    }

    /// Interval between automatic advances.
    #[must_use]
    pub fn rotation_period(&self) -> Duration {
        match self.auto_rotate_speed {
            Some(0) | None => defaults::auto_rotate_period(),
            Some(ms) => Duration::from_millis(u64::from(ms)),
        }
    }

    /// Element ids derived from the section id.
    #[must_use]
    pub fn dom_ids(&self) -> DomIds {
        DomIds::for_section(&self.section_id)
    }
}

/// Element ids a slider looks up in the document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DomIds {
    /// Id of the viewport holding the slides.
    pub viewport: String,
    /// Id of the container holding indicator dots.
    pub indicators: String,
}

impl DomIds {
    /// Derive ids for a section.
    #[must_use]
    pub fn for_section(section_id: &str) -> Self {
        Self {
            viewport: format!("{VIEWPORT_ID_PREFIX}{section_id}"),
            indicators: format!("{INDICATORS_ID_PREFIX}{section_id}"),
        }
    }
}

// Section ids are rendered by the storefront template and may arrive as numbers.
#[derive(Deserialize)]
#[serde(untagged)]
enum SectionIdRepr {
    Text(String),
    Number(serde_json::Number),
}

fn deserialize_section_id<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match SectionIdRepr::deserialize(deserializer)? {
        SectionIdRepr::Text(text) => text,
        SectionIdRepr::Number(number) => number.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_payload_uses_defaults() {
        let config = SliderConfig::from_json(r#"{"sectionId":"template--42"}"#)
            .expect("config should decode");
        assert_eq!(config.section_id, "template--42");
        assert!(!config.auto_rotate_enabled());
        assert_eq!(config.rotation_period(), Duration::from_millis(5_000));
    }

    #[test]
    fn explicit_fields_are_honoured() {
        let config = SliderConfig::from_json(
            r#"{"sectionId":"hero","autoRotate":true,"autoRotateSpeed":3000}"#,
        )
        .expect("config should decode");
        assert!(config.auto_rotate_enabled());
        assert_eq!(config.rotation_period(), Duration::from_millis(3_000));
    }

    #[test]
    fn zero_and_null_speed_fall_back_to_default() {
        let zero = SliderConfig::new("a").with_auto_rotate_speed(0);
        assert_eq!(zero.rotation_period(), defaults::auto_rotate_period());

        let null = SliderConfig::from_json(r#"{"sectionId":"a","autoRotateSpeed":null}"#)
            .expect("null speed should decode");
        assert_eq!(null.rotation_period(), defaults::auto_rotate_period());
    }

    #[test]
    fn numeric_section_ids_are_accepted() {
        let config =
            SliderConfig::from_json(r#"{"sectionId":1234}"#).expect("numeric id should decode");
        assert_eq!(config.section_id, "1234");
        assert_eq!(config.dom_ids().viewport, "slider-1234");
    }

    #[test]
    fn blank_section_id_is_rejected() {
        let err = SliderConfig::from_json(r#"{"sectionId":"  "}"#).unwrap_err();
        assert_eq!(err, SliderError::EmptySectionId);
    }

    #[test]
    fn malformed_payload_is_invalid_config() {
        let err = SliderConfig::from_json(r#"{"autoRotate":true}"#).unwrap_err();
        assert!(matches!(err, SliderError::InvalidConfig { .. }));
    }

    #[test]
    fn dom_ids_follow_section_id() {
        let ids = DomIds::for_section("featured");
        assert_eq!(ids.viewport, "slider-featured");
        assert_eq!(ids.indicators, "indicators-featured");
    }
}
