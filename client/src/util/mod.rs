//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (timers, clipboard,
//! wall clock) from page and component logic so the timer-driven behavior can
//! be tested natively.

pub mod clipboard;
pub mod clock;
pub mod copy_notifier;
pub mod style;
pub mod timer;
pub mod typing_driver;
