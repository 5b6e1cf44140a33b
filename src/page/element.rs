//! Page elements with class, attribute and listener state
//!
//! An [`Element`] is a cheaply cloneable handle to shared element state, so
//! the same element can be held by the document, by the interaction layer
//! and by event callbacks at once. All mutation goes through the handle.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::page::events::{EventCallback, EventKind, ListenerTable};

/// Shared state behind an element handle
struct ElementInner {
    id: Option<String>,
    classes: Vec<String>,
    attributes: HashMap<String, String>,
    listeners: ListenerTable,
}

/// Handle to a single element of the hosting page
///
/// Clones share state: mutating through one handle is visible through all
/// others.
#[derive(Clone)]
pub struct Element {
    inner: Arc<Mutex<ElementInner>>,
}

impl Element {
    /// Creates an element with no id, classes or attributes
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(ElementInner {
                id: None,
                classes: Vec::new(),
                attributes: HashMap::new(),
                listeners: ListenerTable::new(),
            })),
        }
    }

    /// Creates an element carrying the given id
    pub fn with_id(id: &str) -> Self {
        let element = Self::new();
        element.set_id(id);
        element
    }

    /// Creates an element carrying the given class
    pub fn with_class(class: &str) -> Self {
        let element = Self::new();
        element.add_class(class);
        element
    }

    /// Returns the element's id, if one is set
    pub fn id(&self) -> Option<String> {
        self.inner.lock().unwrap().id.clone()
    }

    /// Sets the element's id
    pub fn set_id(&self, id: &str) {
        self.inner.lock().unwrap().id = Some(id.to_string());
    }

    /// Returns true if the element currently carries the class
    pub fn has_class(&self, class: &str) -> bool {
        self.inner
            .lock()
            .unwrap()
            .classes
            .iter()
            .any(|c| c == class)
    }

    /// Adds a class; a class already present is left alone
    pub fn add_class(&self, class: &str) {
        let mut inner = self.inner.lock().unwrap();
        if !inner.classes.iter().any(|c| c == class) {
            inner.classes.push(class.to_string());
        }
    }

    /// Removes a class; absent classes are ignored
    pub fn remove_class(&self, class: &str) {
        self.inner.lock().unwrap().classes.retain(|c| c != class);
    }

    /// Flips a class on or off
    ///
    /// Returns true if the class is present after the flip.
    ///
    /// # Examples
    /// ```rust
    /// use navwire::page::element::Element;
    ///
    /// let element = Element::new();
    /// assert!(element.toggle_class("active"));
    /// assert!(!element.toggle_class("active"));
    /// ```
    pub fn toggle_class(&self, class: &str) -> bool {
        let mut inner = self.inner.lock().unwrap();
        if inner.classes.iter().any(|c| c == class) {
            inner.classes.retain(|c| c != class);
            false
        } else {
            inner.classes.push(class.to_string());
            true
        }
    }

    /// Returns the class list in insertion order
    pub fn class_names(&self) -> Vec<String> {
        self.inner.lock().unwrap().classes.clone()
    }

    /// Returns an attribute value, if set
    pub fn attribute(&self, name: &str) -> Option<String> {
        self.inner.lock().unwrap().attributes.get(name).cloned()
    }

    /// Sets an attribute, replacing any previous value
    pub fn set_attribute(&self, name: &str, value: &str) {
        self.inner
            .lock()
            .unwrap()
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    /// Registers a callback for an event kind on this element
    pub fn add_listener(&self, kind: EventKind, callback: EventCallback) {
        self.inner.lock().unwrap().listeners.add(kind, callback);
    }

    /// Returns how many callbacks are registered for an event kind
    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.inner.lock().unwrap().listeners.count(kind)
    }

    /// Delivers an event to this element, running its callbacks in order
    pub fn dispatch(&self, kind: EventKind) {
        // Snapshot first: no lock is held while callbacks run, so a
        // callback may mutate this element (or re-dispatch) freely.
        let callbacks: Vec<EventCallback> = {
            let inner = self.inner.lock().unwrap();
            inner.listeners.snapshot(kind)
        };

        for callback in callbacks {
            callback();
        }
    }

    /// Delivers a click event
    pub fn click(&self) {
        self.dispatch(EventKind::Click);
    }

    /// Delivers a blur event
    pub fn blur(&self) {
        self.dispatch(EventKind::Blur);
    }
}

impl Default for Element {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.lock().unwrap();
        f.debug_struct("Element")
            .field("id", &inner.id)
            .field("classes", &inner.classes)
            .finish()
    }
}
