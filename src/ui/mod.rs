//! Visual state application
//!
//! Applies menu open/closed state to the page: the active class on the
//! toggle and menu, and the expanded-state attribute on the toggle.

pub mod menu;

pub use menu::{MenuVisuals, ACTIVE_CLASS, EXPANDED_ATTRIBUTE};
