//! Component-local UI state.
//!
//! DESIGN
//! ======
//! Nothing here is shared through context: each card or prompt owns its own
//! state value, created on mount and dropped on unmount.

pub mod panel;
pub mod typing;
