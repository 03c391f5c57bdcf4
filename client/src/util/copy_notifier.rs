//! Transient "copied" indicator for copy-to-clipboard buttons.
//!
//! The indicator goes up when a clipboard write reports success and comes
//! down after a fixed delay. A second success while it is up restarts the
//! delay rather than queueing another revert.

#[cfg(test)]
#[path = "copy_notifier_test.rs"]
mod copy_notifier_test;

use std::cell::Cell;
use std::rc::{Rc, Weak};

use crate::util::clipboard::ClipboardError;
use crate::util::timer::{Scheduler, TimerSlot};

/// How long the indicator stays up after a successful copy.
pub const COPY_FEEDBACK_MS: u32 = 2_000;

struct NotifierCore<S: Scheduler> {
    scheduler: S,
    revert_after_ms: u32,
    copied: Cell<bool>,
    slot: TimerSlot<S::Handle>,
    on_change: Box<dyn Fn(bool)>,
}

/// Indicator state plus its revert timer, one per copy button.
pub struct CopyNotifier<S: Scheduler> {
    core: Rc<NotifierCore<S>>,
}

impl<S: Scheduler> CopyNotifier<S> {
    pub fn new(scheduler: S, revert_after_ms: u32, on_change: impl Fn(bool) + 'static) -> Self {
        Self {
            core: Rc::new(NotifierCore {
                scheduler,
                revert_after_ms,
                copied: Cell::new(false),
                slot: TimerSlot::new(),
                on_change: Box::new(on_change),
            }),
        }
    }

    #[must_use]
    pub fn is_copied(&self) -> bool {
        self.core.copied.get()
    }

    /// Feed the outcome of a clipboard write.
    ///
    /// Failures are logged and leave the indicator as it was.
    pub fn report(&self, result: Result<(), ClipboardError>) {
        match result {
            Ok(()) => self.mark_copied(),
            Err(err) => log::warn!("clipboard write failed: {err}"),
        }
    }

    /// Raise the indicator and (re)start the revert timer.
    pub fn mark_copied(&self) {
        set_copied(&self.core, true);
        let weak: Weak<NotifierCore<S>> = Rc::downgrade(&self.core);
        let handle = self.core.scheduler.schedule(
            self.core.revert_after_ms,
            Box::new(move || {
                let Some(core) = weak.upgrade() else {
                    return;
                };
                core.slot.cancel();
                set_copied(&core, false);
            }),
        );
        self.core.slot.arm(handle);
    }

    /// Drop the pending revert without touching the indicator.
    pub fn cancel(&self) {
        self.core.slot.cancel();
    }
}

impl<S: Scheduler> Drop for CopyNotifier<S> {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn set_copied<S: Scheduler>(core: &NotifierCore<S>, copied: bool) {
    if core.copied.replace(copied) != copied {
        (core.on_change)(copied);
    }
}
