//! Responsive layout rules and the CSS values derived from them.

use serde::Serialize;

use crate::defaults::DOUBLE_VIEW_MAX_WIDTH;

/// How many slides share one page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SlidesPerView {
    /// One slide fills the viewport (wide screens).
    Single,
    /// Two slides side by side (narrow screens).
    Double,
}

impl SlidesPerView {
    /// Pick the layout for a viewport width in CSS pixels.
    #[must_use]
    pub const fn for_width(width: u32) -> Self {
        if width <= DOUBLE_VIEW_MAX_WIDTH {
            Self::Double
        } else {
            Self::Single
        }
    }

    /// Number of slides per page.
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Single => 1,
            Self::Double => 2,
        }
    }
}

/// Number of pages needed to show `slide_count` slides.
#[must_use]
pub const fn page_count(slide_count: usize, per_view: SlidesPerView) -> usize {
    slide_count.div_ceil(per_view.count())
}

/// Track width as a percentage of the viewport so each slide gets an equal share.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn track_width_percent(slide_count: usize, per_view: SlidesPerView) -> f64 {
    match per_view {
        SlidesPerView::Single => slide_count as f64 * 100.0,
        SlidesPerView::Double => (slide_count as f64 / 2.0) * 100.0,
    }
}

/// Horizontal offset of the track, in percent, that brings `page` into view.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn track_offset_percent(page: usize, per_view: SlidesPerView) -> f64 {
    let slide_width = 100.0 / per_view.count() as f64;
    -(page as f64 * slide_width)
}

/// Format a percentage for a CSS declaration (`250%`, `-50%`, `0%`).
#[must_use]
#[allow(clippy::float_cmp)]
pub fn css_percent(value: f64) -> String {
    // Negative zero would otherwise print as "-0%".
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value}%")
}

/// `transform` value placing the track at `offset` percent.
#[must_use]
pub fn translate_x(offset: f64) -> String {
    format!("translateX({})", css_percent(offset))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_is_inclusive() {
        assert_eq!(SlidesPerView::for_width(0), SlidesPerView::Double);
        assert_eq!(SlidesPerView::for_width(800), SlidesPerView::Double);
        assert_eq!(SlidesPerView::for_width(989), SlidesPerView::Double);
        assert_eq!(SlidesPerView::for_width(990), SlidesPerView::Single);
        assert_eq!(SlidesPerView::for_width(1200), SlidesPerView::Single);
    }

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(page_count(5, SlidesPerView::Double), 3);
        assert_eq!(page_count(4, SlidesPerView::Double), 2);
        assert_eq!(page_count(1, SlidesPerView::Double), 1);
        assert_eq!(page_count(5, SlidesPerView::Single), 5);
    }

    #[test]
    fn track_width_scales_with_slides() {
        assert_eq!(css_percent(track_width_percent(5, SlidesPerView::Double)), "250%");
        assert_eq!(css_percent(track_width_percent(3, SlidesPerView::Double)), "150%");
        assert_eq!(css_percent(track_width_percent(4, SlidesPerView::Single)), "400%");
    }

    #[test]
    fn offsets_move_one_page_at_a_time() {
        assert_eq!(translate_x(track_offset_percent(0, SlidesPerView::Single)), "translateX(0%)");
        assert_eq!(
            translate_x(track_offset_percent(2, SlidesPerView::Single)),
            "translateX(-200%)"
        );
        assert_eq!(
            translate_x(track_offset_percent(1, SlidesPerView::Double)),
            "translateX(-50%)"
        );
    }

    #[test]
    fn fractional_values_keep_their_decimals() {
        assert_eq!(css_percent(-12.5), "-12.5%");
    }
}
