//! Event kinds and listener storage for page elements
//!
//! The hosting page delivers user-generated events to elements; elements
//! keep a table of registered callbacks per event kind. Dispatch works on a
//! snapshot of the table so no element lock is held while a callback runs.

use std::collections::HashMap;
use std::sync::Arc;

/// User-generated events the page model can deliver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// The element was activated with a pointer or keyboard
    Click,
    /// The element lost input focus
    Blur,
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventKind::Click => f.write_str("click"),
            EventKind::Blur => f.write_str("blur"),
        }
    }
}

/// Callback invoked when an event fires on an element
pub type EventCallback = Arc<dyn Fn() + Send + Sync>;

/// Per-element listener table keyed by event kind
///
/// Listeners fire in registration order, matching how a page invokes
/// handlers attached to the same element and event.
#[derive(Default)]
pub struct ListenerTable {
    listeners: HashMap<EventKind, Vec<EventCallback>>,
}

impl ListenerTable {
    /// Creates an empty table
    pub fn new() -> Self {
        Self {
            listeners: HashMap::new(),
        }
    }

    /// Registers a callback for an event kind
    pub fn add(&mut self, kind: EventKind, callback: EventCallback) {
        self.listeners.entry(kind).or_default().push(callback);
    }

    /// Returns the number of callbacks registered for an event kind
    pub fn count(&self, kind: EventKind) -> usize {
        self.listeners.get(&kind).map_or(0, Vec::len)
    }

    /// Clones out the callbacks for an event kind, in registration order
    ///
    /// The clones are cheap handle copies; callers invoke them after
    /// releasing whatever lock guards the table.
    pub fn snapshot(&self, kind: EventKind) -> Vec<EventCallback> {
        self.listeners.get(&kind).cloned().unwrap_or_default()
    }
}
