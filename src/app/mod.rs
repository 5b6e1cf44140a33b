//! Application orchestration layer
//!
//! This module coordinates between the page model, the menu state machine
//! and the visual layer. The controller is the single wiring entry point.

pub mod controller;
pub mod state;

pub use controller::{
    go_to_homepage, go_to_mailing_list, wire_error_page, PageController, WiringError,
};
pub use state::{MenuMachine, MenuState, PageEvent};
