//! Page index bookkeeping; out-of-range targets snap to the opposite end.

use crate::error::SliderError;
use crate::layout::{self, SlidesPerView};

/// Current page of a slider over a fixed slide set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pager {
    slide_count: usize,
    per_view: SlidesPerView,
    current: usize,
}

impl Pager {
    /// Start at page 0.
    ///
    /// # Errors
    /// Returns [`SliderError::EmptyViewport`] when there are no slides to page through.
    pub fn new(slide_count: usize, per_view: SlidesPerView) -> crate::Result<Self> {
        if slide_count == 0 {
            return Err(SliderError::EmptyViewport { id: String::new() });
        }
        Ok(Self {
            slide_count,
            per_view,
            current: 0,
        })
    }

    /// Number of slides being paged.
    #[must_use]
    pub const fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// Active slides-per-view layout.
    #[must_use]
    pub const fn per_view(&self) -> SlidesPerView {
        self.per_view
    }

    /// Current page index, always below [`Self::page_count`].
    #[must_use]
    pub const fn current(&self) -> usize {
        self.current
    }

    /// Number of navigable pages under the current layout.
    #[must_use]
    pub const fn page_count(&self) -> usize {
        layout::page_count(self.slide_count, self.per_view)
    }

    /// Move to `target`. Any negative target lands on the last page and any target
    /// past the last page lands on the first.
    ///
    /// Returns the page that became current.
    pub fn go_to(&mut self, target: i64) -> usize {
        let last = self.page_count() - 1;
        self.current = if target < 0 {
            last
        } else {
            match usize::try_from(target) {
                Ok(page) if page <= last => page,
                _ => 0,
            }
        };
        self.current
    }

    /// Advance one page, wrapping from the last page to the first.
    #[allow(clippy::cast_possible_wrap)]
    pub fn next(&mut self) -> usize {
        self.go_to(self.current as i64 + 1)
    }

    /// Step back one page, wrapping from the first page to the last.
    #[allow(clippy::cast_possible_wrap)]
    pub fn prev(&mut self) -> usize {
        self.go_to(self.current as i64 - 1)
    }

    /// Switch layout; when it actually changes the pager returns to page 0.
    ///
    /// Returns whether the layout changed.
    pub fn set_per_view(&mut self, per_view: SlidesPerView) -> bool {
        if per_view == self.per_view {
            return false;
        }
        self.per_view = per_view;
        self.current = 0;
        true
    }

    /// Track width (percent) for the current layout.
    #[must_use]
    pub fn track_width_percent(&self) -> f64 {
        layout::track_width_percent(self.slide_count, self.per_view)
    }

    /// Track offset (percent) revealing the current page.
    #[must_use]
    pub fn track_offset_percent(&self) -> f64 {
        layout::track_offset_percent(self.current, self.per_view)
    }
}
