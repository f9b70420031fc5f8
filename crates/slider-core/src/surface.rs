//! Seams between the controller and its host environment.
//!
//! # Design
//! - The controller never touches the DOM directly; it drives a [`SliderSurface`].
//! - Timers are owned handles: dropping one cancels it, so "at most one live timer"
//!   reduces to holding at most one handle.

use std::time::Duration;

/// Elements a slider writes to.
pub trait SliderSurface {
    /// Number of slides inside the viewport.
    fn slide_count(&self) -> usize;

    /// Number of indicator dots available.
    fn indicator_count(&self) -> usize;

    /// Apply the track `width` CSS value (e.g. `"250%"`).
    fn set_track_width(&self, width: &str);

    /// Apply the track `transform` CSS value (e.g. `"translateX(-50%)"`).
    fn set_track_transform(&self, transform: &str);

    /// Reflect whether the indicator at `index` represents the current page.
    fn set_indicator_active(&self, index: usize, active: bool);
}

/// Source of repeating timers.
pub trait TimerDriver {
    /// Live timer; dropping it cancels the interval.
    type Handle;

    /// Schedule a repeating tick every `period`.
    fn start_interval(&self, period: Duration) -> Self::Handle;
}
