//! navwire: headless page-interaction layer for a static site
//!
//! Implements the site's navigation redirects and mobile menu toggle as an
//! explicitly wired, testable component. A host builds a [`page::Document`]
//! from the elements its markup exposes, hands it to
//! [`app::PageController::wire`] together with [`config::PageBindings`],
//! and then delivers user events to the elements; the controller keeps the
//! menu's class and ARIA state in step. Navigation side effects land on a
//! [`page::Location`].
//!
//! The crate emits `tracing` events at wiring and on state transitions;
//! installing a subscriber is the host's business.

pub mod app;
pub mod config;
pub mod domain;
pub mod page;
pub mod ui;

pub use app::{
    go_to_homepage, go_to_mailing_list, wire_error_page, MenuState, PageController, PageEvent,
    WiringError,
};
pub use config::{BindingsError, PageBindings};
pub use domain::NavTarget;
pub use page::{Document, Element, EventKind, Location};
pub use ui::{MenuVisuals, ACTIVE_CLASS, EXPANDED_ATTRIBUTE};
