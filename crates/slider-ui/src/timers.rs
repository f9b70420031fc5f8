//! gloo-backed timer driver delivering ticks to a shared controller.

use std::cell::RefCell;
use std::rc::Weak;
use std::time::Duration;

use gloo_timers::callback::Interval;
use slider_core::TimerDriver;

use crate::instance::SharedController;

/// Starts `Interval`s that call `on_tick` on the bound controller.
///
/// The driver is created before the controller it serves, so the target is bound
/// afterwards with [`GlooTimers::bind`].
#[derive(Default)]
pub(crate) struct GlooTimers {
    target: RefCell<Weak<SharedController>>,
}

impl GlooTimers {
    pub(crate) fn bind(&self, target: Weak<SharedController>) {
        *self.target.borrow_mut() = target;
    }
}

impl TimerDriver for GlooTimers {
    type Handle = Interval;

    fn start_interval(&self, period: Duration) -> Self::Handle {
        let target = self.target.borrow().clone();
        let millis = u32::try_from(period.as_millis()).unwrap_or(u32::MAX);
        Interval::new(millis, move || {
            let Some(shared) = target.upgrade() else {
                return;
            };
            if let Ok(mut controller) = shared.try_borrow_mut() {
                controller.on_tick();
            }
        })
    }
}
