//! Error types for slider construction.
//!
//! None of these reach the page author: the binding layer turns every failure into an
//! inert slider and only logs the reason.

use thiserror::Error;

/// Result alias used across the slider crates.
pub type Result<T> = std::result::Result<T, SliderError>;

/// Reasons a slider could not be brought up.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SliderError {
    /// Configuration carried a blank section id.
    #[error("slider section id is empty")]
    EmptySectionId,
    /// No element matched the derived viewport id.
    #[error("slider viewport not found")]
    MissingViewport {
        /// Element id that was looked up.
        id: String,
    },
    /// The viewport exists but has no slide children.
    #[error("slider viewport has no slides")]
    EmptyViewport {
        /// Element id of the empty viewport.
        id: String,
    },
    /// Configuration payload could not be decoded.
    #[error("invalid slider configuration")]
    InvalidConfig {
        /// Decoder message describing the failure.
        reason: String,
    },
}

impl SliderError {
    /// Machine-readable label used in log lines.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::EmptySectionId => "empty_section_id",
            Self::MissingViewport { .. } => "missing_viewport",
            Self::EmptyViewport { .. } => "empty_viewport",
            Self::InvalidConfig { .. } => "invalid_config",
        }
    }
}
