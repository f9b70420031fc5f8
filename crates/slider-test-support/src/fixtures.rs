//! Recording surface and logging setup for slider tests.

use std::cell::RefCell;
use std::rc::Rc;

use once_cell::sync::OnceCell;
use slider_core::SliderSurface;
use tracing_subscriber::EnvFilter;

static TRACING: OnceCell<()> = OnceCell::new();

/// Install a test-writer tracing subscriber once per process.
///
/// Honours `RUST_LOG`; defaults to `slider_core=debug`.
pub fn init_tracing() {
    TRACING.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("slider_core=debug"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

/// Everything a [`RecordingSurface`] has been told to display.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SurfaceState {
    /// Last track width written.
    pub width: Option<String>,
    /// Last track transform written.
    pub transform: Option<String>,
    /// Active flag per indicator.
    pub indicators: Vec<bool>,
    /// Number of transform writes (one per render).
    pub renders: usize,
}

impl SurfaceState {
    /// Index of the single active indicator, if exactly one is active.
    #[must_use]
    pub fn active_indicator(&self) -> Option<usize> {
        let mut active = self
            .indicators
            .iter()
            .enumerate()
            .filter(|(_, on)| **on)
            .map(|(index, _)| index);
        let first = active.next()?;
        active.next().is_none().then_some(first)
    }
}

/// In-memory [`SliderSurface`] whose writes can be inspected after the controller owns it.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    slides: usize,
    state: Rc<RefCell<SurfaceState>>,
}

impl RecordingSurface {
    /// Surface with `slides` slides and `indicators` indicator dots.
    #[must_use]
    pub fn new(slides: usize, indicators: usize) -> Self {
        let state = SurfaceState {
            indicators: vec![false; indicators],
            ..SurfaceState::default()
        };
        Self {
            slides,
            state: Rc::new(RefCell::new(state)),
        }
    }

    /// Handle sharing this surface's recorded state.
    #[must_use]
    pub fn view(&self) -> SurfaceView {
        SurfaceView(Rc::clone(&self.state))
    }
}

impl SliderSurface for RecordingSurface {
    fn slide_count(&self) -> usize {
        self.slides
    }

    fn indicator_count(&self) -> usize {
        self.state.borrow().indicators.len()
    }

    fn set_track_width(&self, width: &str) {
        self.state.borrow_mut().width = Some(width.to_string());
    }

    fn set_track_transform(&self, transform: &str) {
        let mut state = self.state.borrow_mut();
        state.transform = Some(transform.to_string());
        state.renders += 1;
    }

    fn set_indicator_active(&self, index: usize, active: bool) {
        if let Some(slot) = self.state.borrow_mut().indicators.get_mut(index) {
            *slot = active;
        }
    }
}

/// Read side of a [`RecordingSurface`].
#[derive(Clone, Debug)]
pub struct SurfaceView(Rc<RefCell<SurfaceState>>);

impl SurfaceView {
    /// Copy of everything recorded so far.
    #[must_use]
    pub fn state(&self) -> SurfaceState {
        self.0.borrow().clone()
    }

    /// Last transform written, or an empty string before the first render.
    #[must_use]
    pub fn transform(&self) -> String {
        self.0.borrow().transform.clone().unwrap_or_default()
    }

    /// Last width written, or an empty string before layout.
    #[must_use]
    pub fn width(&self) -> String {
        self.0.borrow().width.clone().unwrap_or_default()
    }
}
