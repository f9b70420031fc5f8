//! Default values for slider configuration and layout.
//!
//! # Design
//! - Centralize defaults so the binding layer and host tests agree on them.
//! - Keep time-based defaults explicit in milliseconds.

use std::time::Duration;

/// Auto-rotate interval used when none (or zero) is configured.
pub const AUTO_ROTATE_SPEED_MS: u32 = 5_000;
/// Widest viewport (inclusive, in CSS pixels) that still shows two slides per page.
pub const DOUBLE_VIEW_MAX_WIDTH: u32 = 989;
/// Tag name of the placeholder custom element.
pub const ELEMENT_TAG: &str = "image-text-slider";

/// Default auto-rotate interval as a [`Duration`].
#[must_use]
pub const fn auto_rotate_period() -> Duration {
    Duration::from_millis(AUTO_ROTATE_SPEED_MS as u64)
}
