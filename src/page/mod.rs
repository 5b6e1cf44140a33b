//! Headless model of the hosting page
//!
//! This module encapsulates the surface the interaction layer acts on:
//! elements with classes, attributes and listeners, a document to look them
//! up in, and a location that absorbs navigation side effects. Nothing in
//! here knows about the menu or the redirect rules.

pub mod document;
pub mod element;
pub mod events;
pub mod location;

pub use document::Document;
pub use element::Element;
pub use events::{EventCallback, EventKind};
pub use location::Location;
