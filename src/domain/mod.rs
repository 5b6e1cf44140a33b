//! Domain logic and core data structures
//!
//! This module contains pure vocabulary that is independent of the page
//! model: the fixed navigation targets and their relative paths.

pub mod nav;

pub use nav::NavTarget;
