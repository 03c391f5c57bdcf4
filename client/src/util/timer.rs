//! One-shot timer scheduling.
//!
//! DESIGN
//! ======
//! Timer-driven UI logic is written against [`Scheduler`] instead of calling
//! `setTimeout` directly. A scheduled callback is owned by its handle and
//! dropping the handle cancels it, matching `gloo_timers::callback::Timeout`.
//! In the browser the scheduler is [`BrowserScheduler`]; unit tests drive the
//! same logic on a virtual clock.

#[cfg(test)]
#[path = "timer_test.rs"]
pub(crate) mod timer_test;

use std::cell::RefCell;

/// Schedules single-shot callbacks on the current thread's event loop.
pub trait Scheduler: Clone + 'static {
    /// Cancels the callback when dropped.
    type Handle: 'static;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;
}

/// `setTimeout`-backed scheduler.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

#[cfg(feature = "hydrate")]
impl Scheduler for BrowserScheduler {
    type Handle = gloo_timers::callback::Timeout;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle {
        gloo_timers::callback::Timeout::new(delay_ms, callback)
    }
}

/// Holds at most one pending handle.
///
/// Arming the slot drops (and so cancels) whatever was pending before.
pub struct TimerSlot<H> {
    pending: RefCell<Option<H>>,
}

impl<H> TimerSlot<H> {
    #[must_use]
    pub fn new() -> Self {
        Self { pending: RefCell::new(None) }
    }

    pub fn arm(&self, handle: H) {
        // Take the old handle out first so its drop runs without the borrow held.
        let previous = self.pending.borrow_mut().replace(handle);
        drop(previous);
    }

    /// Cancel the pending callback, if any. Returns whether one was pending.
    pub fn cancel(&self) -> bool {
        let previous = self.pending.borrow_mut().take();
        previous.is_some()
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.pending.borrow().is_some()
    }
}

impl<H> Default for TimerSlot<H> {
    fn default() -> Self {
        Self::new()
    }
}
