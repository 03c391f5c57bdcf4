//! Timer loop that plays a [`TypingState`] forward.
//!
//! ARCHITECTURE
//! ============
//! Exactly one callback is pending at any time: each tick advances the state,
//! notifies the observer, then schedules the next tick. The pending handle
//! lives in a [`TimerSlot`] next to the state, and callbacks only hold a weak
//! reference back to it. Cancelling the driver (or dropping it) clears the
//! slot, so nothing mutates state after the owning view is gone.

#[cfg(test)]
#[path = "typing_driver_test.rs"]
mod typing_driver_test;

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::state::typing::{TypingError, TypingState, TypingTiming};
use crate::util::timer::{Scheduler, TimerSlot};

type Observer = Box<dyn Fn(&TypingState)>;

struct DriverCore<S: Scheduler> {
    scheduler: S,
    timing: TypingTiming,
    state: RefCell<TypingState>,
    slot: TimerSlot<S::Handle>,
    stopped: Cell<bool>,
    on_change: Observer,
}

/// Owns the typing loop for one prompt instance.
pub struct TypingDriver<S: Scheduler> {
    core: Rc<DriverCore<S>>,
}

impl<S: Scheduler> TypingDriver<S> {
    /// Build the state, report it once, and schedule the first tick.
    ///
    /// # Errors
    ///
    /// Returns [`TypingError::NoPhrases`] when `phrases` is empty; nothing is
    /// scheduled in that case.
    pub fn start(
        phrases: Vec<String>,
        timing: TypingTiming,
        scheduler: S,
        on_change: impl Fn(&TypingState) + 'static,
    ) -> Result<Self, TypingError> {
        let state = TypingState::new(phrases)?;
        let core = Rc::new(DriverCore {
            scheduler,
            timing,
            state: RefCell::new(state),
            slot: TimerSlot::new(),
            stopped: Cell::new(false),
            on_change: Box::new(on_change),
        });
        (core.on_change)(&core.state.borrow());
        schedule_tick(&core);
        Ok(Self { core })
    }

    /// Snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> TypingState {
        self.core.state.borrow().clone()
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        !self.core.stopped.get() && self.core.slot.is_armed()
    }

    /// Cancel the pending tick. The driver stays frozen afterwards.
    pub fn cancel(&self) {
        self.core.stopped.set(true);
        if self.core.slot.cancel() {
            log::debug!("typing prompt stopped at phrase {}", self.core.state.borrow().phrase_index());
        }
    }
}

impl<S: Scheduler> Drop for TypingDriver<S> {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn schedule_tick<S: Scheduler>(core: &Rc<DriverCore<S>>) {
    if core.stopped.get() {
        return;
    }
    let delay = core.state.borrow().next_delay_ms(core.timing);
    let weak: Weak<DriverCore<S>> = Rc::downgrade(core);
    let handle = core.scheduler.schedule(
        delay,
        Box::new(move || {
            let Some(core) = weak.upgrade() else {
                return;
            };
            if core.stopped.get() {
                return;
            }
            core.state.borrow_mut().advance();
            (core.on_change)(&core.state.borrow());
            schedule_tick(&core);
        }),
    );
    core.slot.arm(handle);
}
