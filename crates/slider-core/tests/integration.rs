use std::time::Duration;

use slider_core::{SliderConfig, SliderController, SliderRegistry, SlidesPerView};
use slider_test_support::clock::ManualClock;
use slider_test_support::fixtures::{RecordingSurface, SurfaceView, init_tracing};

type TestSlider = SliderController<RecordingSurface, ManualClock>;

const DESKTOP: u32 = 1200;
const TABLET: u32 = 800;

fn mount(
    config: &SliderConfig,
    slides: usize,
    indicators: usize,
    width: u32,
) -> anyhow::Result<(TestSlider, SurfaceView, ManualClock)> {
    init_tracing();
    let surface = RecordingSurface::new(slides, indicators);
    let view = surface.view();
    let clock = ManualClock::new();
    let mut slider = SliderController::new(config, surface, clock.clone(), width)?;
    slider.init();
    Ok((slider, view, clock))
}

/// Deliver every tick that comes due while `by` elapses.
fn elapse(slider: &mut TestSlider, clock: &ManualClock, by: Duration) {
    for _ in 0..clock.advance(by) {
        slider.on_tick();
    }
}

#[test]
fn five_slides_two_per_view_make_three_pages() -> anyhow::Result<()> {
    let (slider, view, _) = mount(&SliderConfig::new("grid"), 5, 3, TABLET)?;
    assert_eq!(slider.slides_per_view(), SlidesPerView::Double);
    assert_eq!(slider.page_count(), 3);
    assert_eq!(view.width(), "250%");
    Ok(())
}

#[test]
fn out_of_range_targets_land_on_first_or_last_page() -> anyhow::Result<()> {
    let (mut slider, _, _) = mount(&SliderConfig::new("wrap"), 4, 4, DESKTOP)?;
    let pages = i64::try_from(slider.page_count())?;
    for index in 0..pages {
        slider.go_to(index);
        assert_eq!(i64::try_from(slider.current_page())?, index);
    }

    slider.go_to(1);
    slider.go_to(-1);
    assert_eq!(slider.current_page(), 3);
    slider.go_to(-3);
    assert_eq!(slider.current_page(), 3);
    slider.go_to(pages);
    assert_eq!(slider.current_page(), 0);
    slider.go_to(2);
    slider.go_to(pages + 2);
    assert_eq!(slider.current_page(), 0);
    Ok(())
}

#[test]
fn narrow_layout_with_one_dot_per_slide() -> anyhow::Result<()> {
    let (mut slider, view, _) = mount(&SliderConfig::new("dots-narrow"), 5, 5, TABLET)?;
    assert_eq!(slider.page_count(), 3);

    slider.go_to(2);
    assert_eq!(view.state().indicators, vec![false, false, true, false, false]);

    // Dots past the last page send the slider back to the first page.
    slider.go_to(3);
    assert_eq!(slider.current_page(), 0);
    assert_eq!(view.transform(), "translateX(0%)");
    assert_eq!(view.state().active_indicator(), Some(0));

    slider.go_to(1);
    slider.go_to(4);
    assert_eq!(slider.current_page(), 0);
    let state = view.state();
    assert_eq!(state.active_indicator(), Some(0));
    assert!(state.indicators[3..].iter().all(|active| !active));
    Ok(())
}

#[test]
fn full_cycle_of_next_returns_to_initial_page() -> anyhow::Result<()> {
    let (mut slider, view, _) = mount(&SliderConfig::new("cycle"), 5, 3, TABLET)?;
    slider.go_to(2);
    let start = view.transform();
    for _ in 0..slider.page_count() {
        slider.next();
    }
    assert_eq!(slider.current_page(), 2);
    assert_eq!(view.transform(), start);
    Ok(())
}

#[test]
fn indicators_track_the_current_page() -> anyhow::Result<()> {
    let (mut slider, view, _) = mount(&SliderConfig::new("dots"), 3, 3, DESKTOP)?;
    assert_eq!(view.state().active_indicator(), Some(0));
    slider.prev();
    assert_eq!(view.state().active_indicator(), Some(2));
    assert_eq!(view.transform(), "translateX(-200%)");
    slider.go_to(1);
    assert_eq!(view.state().active_indicator(), Some(1));
    Ok(())
}

#[test]
fn restarting_rotation_never_doubles_ticks() -> anyhow::Result<()> {
    let config = SliderConfig::new("rotate")
        .with_auto_rotate(true)
        .with_auto_rotate_speed(1_000);
    let (mut slider, _, clock) = mount(&config, 4, 0, DESKTOP)?;
    slider.start_auto_rotate();
    slider.start_auto_rotate();
    assert_eq!(clock.live(), 1);

    elapse(&mut slider, &clock, Duration::from_millis(1_000));
    assert_eq!(slider.current_page(), 1);
    elapse(&mut slider, &clock, Duration::from_millis(1_000));
    assert_eq!(slider.current_page(), 2);
    Ok(())
}

#[test]
fn hover_suspends_rotation_until_a_full_interval_after_leave() -> anyhow::Result<()> {
    let config = SliderConfig::new("hover").with_auto_rotate(true);
    let (mut slider, _, clock) = mount(&config, 3, 3, DESKTOP)?;

    elapse(&mut slider, &clock, Duration::from_millis(2_000));
    slider.on_pointer_enter();
    assert_eq!(clock.live(), 0);
    elapse(&mut slider, &clock, Duration::from_millis(10_000));
    assert_eq!(slider.current_page(), 0);

    slider.on_pointer_leave();
    elapse(&mut slider, &clock, Duration::from_millis(4_999));
    assert_eq!(slider.current_page(), 0);
    elapse(&mut slider, &clock, Duration::from_millis(1));
    assert_eq!(slider.current_page(), 1);
    Ok(())
}

#[test]
fn disabled_rotation_ignores_hover_and_ticks() -> anyhow::Result<()> {
    let (mut slider, _, clock) = mount(&SliderConfig::new("static"), 3, 0, DESKTOP)?;
    slider.on_pointer_enter();
    slider.on_pointer_leave();
    slider.on_tick();
    assert_eq!(clock.started(), 0);
    assert_eq!(slider.current_page(), 0);
    Ok(())
}

#[test]
fn resizing_across_breakpoint_resets_to_first_page() -> anyhow::Result<()> {
    let (mut slider, view, _) = mount(&SliderConfig::new("resize"), 5, 5, DESKTOP)?;
    slider.go_to(3);
    assert_eq!(slider.slides_per_view(), SlidesPerView::Single);
    assert_eq!(view.width(), "500%");

    assert!(slider.on_resize(TABLET));
    assert_eq!(slider.slides_per_view(), SlidesPerView::Double);
    assert_eq!(slider.current_page(), 0);
    assert_eq!(view.width(), "250%");
    assert_eq!(view.transform(), "translateX(0%)");

    assert!(!slider.on_resize(600));
    assert_eq!(slider.current_page(), 0);
    Ok(())
}

#[test]
fn empty_viewport_is_rejected() {
    let result = SliderController::new(
        &SliderConfig::new("empty"),
        RecordingSurface::new(0, 2),
        ManualClock::new(),
        DESKTOP,
    );
    assert!(result.is_err());
}

#[test]
fn snapshot_serialises_in_camel_case() -> anyhow::Result<()> {
    let (slider, _, _) = mount(&SliderConfig::new("snap"), 2, 0, DESKTOP)?;
    let value = serde_json::to_value(slider.snapshot())?;
    assert_eq!(value["sectionId"], "snap");
    assert_eq!(value["pageCount"], 2);
    assert_eq!(value["slidesPerView"], 1);
    assert_eq!(value["autoRotating"], false);
    Ok(())
}

#[test]
fn registry_hands_back_replaced_sliders_for_teardown() -> anyhow::Result<()> {
    let config = SliderConfig::new("hero").with_auto_rotate(true);
    let (first, _, first_clock) = mount(&config, 3, 0, DESKTOP)?;
    let (second, _, _) = mount(&config, 3, 0, DESKTOP)?;

    let mut registry = SliderRegistry::new();
    assert!(registry.mount("hero", first).is_none());
    let replaced = registry.mount("hero", second);
    assert!(replaced.is_some());
    drop(replaced);
    assert_eq!(first_clock.live(), 0);
    assert_eq!(registry.len(), 1);
    Ok(())
}
