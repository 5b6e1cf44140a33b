//! Configuration module for navwire
//!
//! The only user-facing configuration is the set of bindings telling the
//! wiring step where to find its elements on the hosting page.

pub mod bindings;

pub use bindings::{BindingsError, PageBindings};
