//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The site has a single page; it owns composition and delegates rendering
//! details to `components`.

pub mod portfolio;
