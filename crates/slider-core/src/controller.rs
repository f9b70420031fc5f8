//! Slider state machine: one page index, one optional timer, and the renders they drive.
//!
//! # Design
//! - Every event handler mutates the page index and re-renders synchronously.
//! - Starting rotation drops the previous timer handle before creating a new one.
//! - Hosts feed viewport widths and timer ticks in; the controller never reads globals.

use std::time::Duration;

use serde::Serialize;
use tracing::{debug, info};

use crate::config::SliderConfig;
use crate::error::SliderError;
use crate::layout::{self, SlidesPerView};
use crate::pager::Pager;
use crate::surface::{SliderSurface, TimerDriver};

/// Controller for a single slider instance.
pub struct SliderController<S, T: TimerDriver> {
    section_id: String,
    surface: S,
    timers: T,
    pager: Pager,
    auto_rotate: bool,
    period: Duration,
    timer: Option<T::Handle>,
}

/// Read-only view of a controller, serialised for script callers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SliderSnapshot {
    /// Section the slider is bound to.
    pub section_id: String,
    /// Current page index.
    pub current_page: usize,
    /// Number of navigable pages.
    pub page_count: usize,
    /// Number of slides in the viewport.
    pub slide_count: usize,
    /// Slides shown per page.
    pub slides_per_view: usize,
    /// Whether auto-rotation was configured.
    pub auto_rotate: bool,
    /// Whether a rotation timer is live right now.
    pub auto_rotating: bool,
}

impl<S: SliderSurface, T: TimerDriver> SliderController<S, T> {
    /// Build a controller over `surface` for a viewport `viewport_width` pixels wide.
    ///
    /// Nothing is rendered until [`Self::init`] runs.
    ///
    /// # Errors
    /// Returns [`SliderError::EmptySectionId`] for a blank section id and
    /// [`SliderError::EmptyViewport`] when the surface has no slides.
    pub fn new(
        config: &SliderConfig,
        surface: S,
        timers: T,
        viewport_width: u32,
    ) -> crate::Result<Self> {
        config.validate()?;
        let per_view = SlidesPerView::for_width(viewport_width);
        let pager = Pager::new(surface.slide_count(), per_view).map_err(|_| {
            SliderError::EmptyViewport {
                id: config.dom_ids().viewport,
            }
        })?;
        Ok(Self {
            section_id: config.section_id.clone(),
            surface,
            timers,
            pager,
            auto_rotate: config.auto_rotate_enabled(),
            period: config.rotation_period(),
            timer: None,
        })
    }

    /// Size the track, render the first page, and start rotation when configured.
    pub fn init(&mut self) {
        self.layout_viewport();
        self.render();
        if self.auto_rotate {
            self.start_auto_rotate();
        }
        info!(
            section = %self.section_id,
            slides = self.pager.slide_count(),
            pages = self.pager.page_count(),
            auto_rotate = self.auto_rotate,
            "slider mounted"
        );
    }

    /// Section the slider is bound to.
    #[must_use]
    pub fn section_id(&self) -> &str {
        &self.section_id
    }

    /// Current page index.
    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.pager.current()
    }

    /// Number of navigable pages.
    #[must_use]
    pub const fn page_count(&self) -> usize {
        self.pager.page_count()
    }

    /// Active slides-per-view layout.
    #[must_use]
    pub const fn slides_per_view(&self) -> SlidesPerView {
        self.pager.per_view()
    }

    /// Whether a rotation timer is live.
    #[must_use]
    pub const fn is_rotating(&self) -> bool {
        self.timer.is_some()
    }

    /// Surface the controller renders into.
    #[must_use]
    pub const fn surface(&self) -> &S {
        &self.surface
    }

    /// Timer source used for auto-rotation.
    #[must_use]
    pub const fn timers(&self) -> &T {
        &self.timers
    }

    /// Capture the current state.
    #[must_use]
    pub fn snapshot(&self) -> SliderSnapshot {
        SliderSnapshot {
            section_id: self.section_id.clone(),
            current_page: self.pager.current(),
            page_count: self.pager.page_count(),
            slide_count: self.pager.slide_count(),
            slides_per_view: self.pager.per_view().count(),
            auto_rotate: self.auto_rotate,
            auto_rotating: self.is_rotating(),
        }
    }

    /// Width the track so every slide takes an equal share of the viewport.
    pub fn layout_viewport(&self) {
        let width = layout::css_percent(self.pager.track_width_percent());
        self.surface.set_track_width(&width);
    }

    /// Translate the track to the current page and sync indicator state.
    pub fn render(&self) {
        let transform = layout::translate_x(self.pager.track_offset_percent());
        self.surface.set_track_transform(&transform);
        let current = self.pager.current();
        for index in 0..self.surface.indicator_count() {
            self.surface.set_indicator_active(index, index == current);
        }
    }

    /// Jump to `target` (negative → last page, past the end → first page), then render.
    pub fn go_to(&mut self, target: i64) {
        let page = self.pager.go_to(target);
        debug!(section = %self.section_id, requested = target, page, "slider page changed");
        self.render();
    }

    /// Advance one page.
    pub fn next(&mut self) {
        let page = self.pager.next();
        debug!(section = %self.section_id, page, "slider advanced");
        self.render();
    }

    /// Step back one page.
    pub fn prev(&mut self) {
        let page = self.pager.prev();
        debug!(section = %self.section_id, page, "slider stepped back");
        self.render();
    }

    /// Replace any live timer with a fresh one ticking every configured period.
    pub fn start_auto_rotate(&mut self) {
        self.stop_auto_rotate();
        self.timer = Some(self.timers.start_interval(self.period));
        debug!(
            section = %self.section_id,
            period_ms = u64::try_from(self.period.as_millis()).unwrap_or(u64::MAX),
            "slider rotation started"
        );
    }

    /// Cancel the live timer, if any.
    pub fn stop_auto_rotate(&mut self) {
        if self.timer.take().is_some() {
            debug!(section = %self.section_id, "slider rotation stopped");
        }
    }

    /// Timer callback; ignored when no timer is live.
    pub fn on_tick(&mut self) {
        if self.timer.is_some() {
            self.next();
        }
    }

    /// Re-evaluate the layout for a new viewport width.
    ///
    /// A layout change re-sizes the track and returns to the first page. Returns whether
    /// the layout changed.
    pub fn on_resize(&mut self, viewport_width: u32) -> bool {
        let per_view = SlidesPerView::for_width(viewport_width);
        if !self.pager.set_per_view(per_view) {
            return false;
        }
        debug!(
            section = %self.section_id,
            viewport_width,
            slides_per_view = per_view.count(),
            "slider layout changed"
        );
        self.layout_viewport();
        self.go_to(0);
        true
    }

    /// Pointer entered the viewport: pause rotation.
    pub fn on_pointer_enter(&mut self) {
        self.stop_auto_rotate();
    }

    /// Pointer left the viewport: resume rotation when it was configured.
    pub fn on_pointer_leave(&mut self) {
        if self.auto_rotate {
            self.start_auto_rotate();
        }
    }
}
