//! Document lookup over a set of page elements
//!
//! The document is how a host hands its elements to the wiring step: it
//! answers the same lookups the hosting page's markup conventions rely on,
//! by id or by class, either first match or every match.

use crate::page::element::Element;

/// The set of elements a hosting page exposes
#[derive(Default)]
pub struct Document {
    elements: Vec<Element>,
}

impl Document {
    /// Creates an empty document
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Adds an element and returns its handle back to the caller
    pub fn insert(&mut self, element: Element) -> Element {
        self.elements.push(element.clone());
        element
    }

    /// Returns the first element with the given id
    pub fn element_by_id(&self, id: &str) -> Option<Element> {
        self.elements
            .iter()
            .find(|element| element.id().as_deref() == Some(id))
            .cloned()
    }

    /// Returns the first element carrying the given class
    pub fn first_by_class(&self, class: &str) -> Option<Element> {
        self.elements
            .iter()
            .find(|element| element.has_class(class))
            .cloned()
    }

    /// Returns every element carrying the given class, in document order
    pub fn all_by_class(&self, class: &str) -> Vec<Element> {
        self.elements
            .iter()
            .filter(|element| element.has_class(class))
            .cloned()
            .collect()
    }

    /// Number of elements in the document
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if the document holds no elements
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
