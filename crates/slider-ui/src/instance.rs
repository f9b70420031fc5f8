//! A mounted slider: shared controller plus the listeners feeding it.
//!
//! # Design
//! - The controller lives in `Rc<RefCell<_>>`; listeners and timers only hold `Weak`
//!   references, so dropping the instance detaches everything.
//! - Handlers use `try_borrow_mut` and skip the event if the controller is busy.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use slider_core::{SliderConfig, SliderController, SliderError, SliderSnapshot};
use web_sys::EventTarget;

use crate::dom::{DomSurface, ListenerTargets};
use crate::logic::viewport_width;
use crate::timers::GlooTimers;

pub(crate) type DomController = SliderController<DomSurface, GlooTimers>;
pub(crate) type SharedController = RefCell<DomController>;

pub(crate) struct SliderInstance {
    section_id: String,
    controller: Rc<SharedController>,
    listeners: Vec<EventListener>,
}

impl SliderInstance {
    /// Resolve markup for `config`, attach listeners and render the first page.
    pub(crate) fn mount(config: &SliderConfig) -> Result<Self, SliderError> {
        config.validate()?;
        let surface = DomSurface::resolve(&gloo::utils::document(), &config.dom_ids())?;
        let targets = surface.listener_targets();
        let controller = SliderController::new(
            config,
            surface,
            GlooTimers::default(),
            current_viewport_width(),
        )?;

        let shared = Rc::new(RefCell::new(controller));
        shared.borrow().timers().bind(Rc::downgrade(&shared));
        let listeners = attach_listeners(&shared, &targets);
        shared.borrow_mut().init();

        Ok(Self {
            section_id: config.section_id.clone(),
            controller: shared,
            listeners,
        })
    }

    pub(crate) fn section_id(&self) -> &str {
        &self.section_id
    }

    /// Run `action` against the controller unless it is already borrowed.
    pub(crate) fn with<R>(&self, action: impl FnOnce(&mut DomController) -> R) -> Option<R> {
        let mut controller = self.controller.try_borrow_mut().ok()?;
        Some(action(&mut controller))
    }

    pub(crate) fn snapshot(&self) -> Option<SliderSnapshot> {
        self.controller
            .try_borrow()
            .ok()
            .map(|controller| controller.snapshot())
    }

    /// Detach listeners and cancel rotation; the instance stays inert afterwards.
    pub(crate) fn destroy(&mut self) {
        self.listeners.clear();
        self.with(DomController::stop_auto_rotate);
    }
}

fn current_viewport_width() -> u32 {
    gloo::utils::window()
        .inner_width()
        .ok()
        .and_then(|width| width.as_f64())
        .map_or(0, viewport_width)
}

fn attach_listeners(
    shared: &Rc<SharedController>,
    targets: &ListenerTargets,
) -> Vec<EventListener> {
    let mut listeners = Vec::with_capacity(targets.indicators.len() + 5);

    if let Some(prev) = &targets.prev {
        listeners.push(listen(prev, "click", shared, DomController::prev));
    }
    if let Some(next) = &targets.next {
        listeners.push(listen(next, "click", shared, DomController::next));
    }
    for (index, indicator) in targets.indicators.iter().enumerate() {
        let page = i64::try_from(index).unwrap_or(i64::MAX);
        listeners.push(listen(indicator, "click", shared, move |controller| {
            controller.go_to(page);
        }));
    }

    listeners.push(listen(
        &targets.track,
        "mouseenter",
        shared,
        DomController::on_pointer_enter,
    ));
    listeners.push(listen(
        &targets.track,
        "mouseleave",
        shared,
        DomController::on_pointer_leave,
    ));
    listeners.push(listen(
        &gloo::utils::window(),
        "resize",
        shared,
        |controller| {
            controller.on_resize(current_viewport_width());
        },
    ));

    listeners
}

fn listen<F>(
    target: &EventTarget,
    event_type: &'static str,
    shared: &Rc<SharedController>,
    mut action: F,
) -> EventListener
where
    F: FnMut(&mut DomController) + 'static,
{
    let weak = Rc::downgrade(shared);
    EventListener::new(target, event_type, move |_event| {
        let Some(shared) = weak.upgrade() else {
            return;
        };
        if let Ok(mut controller) = shared.try_borrow_mut() {
            action(&mut controller);
        }
    })
}
