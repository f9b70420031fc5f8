//! Manually advanced timer driver.
//!
//! Intervals only fire when the test calls [`ManualClock::advance`], which reports how
//! many ticks came due across every live interval. Dropping a [`ManualInterval`]
//! cancels it, mirroring how browser interval handles behave.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use slider_core::TimerDriver;

#[derive(Debug)]
struct Slot {
    id: u64,
    period_ms: u64,
    elapsed_ms: u64,
}

#[derive(Debug, Default)]
struct ClockState {
    next_id: u64,
    started: usize,
    slots: Vec<Slot>,
}

/// Timer driver whose time only moves when told to.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    state: Rc<RefCell<ClockState>>,
}

/// Live interval created by a [`ManualClock`]; dropping it cancels the interval.
#[derive(Debug)]
pub struct ManualInterval {
    id: u64,
    state: Weak<RefCell<ClockState>>,
}

impl ManualClock {
    /// Clock with no live intervals.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Move time forward by `by`, returning the number of ticks that came due.
    pub fn advance(&self, by: Duration) -> usize {
        let by_ms = u64::try_from(by.as_millis()).unwrap_or(u64::MAX);
        let mut fired = 0;
        for slot in &mut self.state.borrow_mut().slots {
            slot.elapsed_ms = slot.elapsed_ms.saturating_add(by_ms);
            let due = slot.elapsed_ms / slot.period_ms;
            slot.elapsed_ms %= slot.period_ms;
            fired += usize::try_from(due).unwrap_or(usize::MAX);
        }
        fired
    }

    /// Number of intervals currently live.
    #[must_use]
    pub fn live(&self) -> usize {
        self.state.borrow().slots.len()
    }

    /// Number of intervals ever started.
    #[must_use]
    pub fn started(&self) -> usize {
        self.state.borrow().started
    }
}

impl TimerDriver for ManualClock {
    type Handle = ManualInterval;

    fn start_interval(&self, period: Duration) -> Self::Handle {
        let mut state = self.state.borrow_mut();
        let id = state.next_id;
        state.next_id += 1;
        state.started += 1;
        state.slots.push(Slot {
            id,
            period_ms: u64::try_from(period.as_millis()).unwrap_or(u64::MAX).max(1),
            elapsed_ms: 0,
        });
        ManualInterval {
            id,
            state: Rc::downgrade(&self.state),
        }
    }
}

impl Drop for ManualInterval {
    fn drop(&mut self) {
        if let Some(state) = self.state.upgrade() {
            state.borrow_mut().slots.retain(|slot| slot.id != self.id);
        }
    }
}
