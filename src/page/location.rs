//! Browsing-context location for navigation side effects
//!
//! Redirects land here instead of in a real browser. The location keeps the
//! current href and counts navigations so hosts and tests can observe both
//! where the page went and how often.

use std::sync::{Arc, Mutex};

#[derive(Debug)]
struct LocationInner {
    href: String,
    navigations: u32,
}

/// Shared handle to the current browsing-context location
///
/// Clones share state, so the wiring step and its callbacks can all drive
/// the same location.
#[derive(Debug, Clone)]
pub struct Location {
    inner: Arc<Mutex<LocationInner>>,
}

impl Location {
    /// Creates a location currently at the given href
    pub fn new(href: &str) -> Self {
        Self {
            inner: Arc::new(Mutex::new(LocationInner {
                href: href.to_string(),
                navigations: 0,
            })),
        }
    }

    /// Returns the current href
    pub fn href(&self) -> String {
        self.inner.lock().unwrap().href.clone()
    }

    /// Navigates the browsing context to the given href
    pub fn assign(&self, href: &str) {
        tracing::debug!("Navigating to {}", href);
        let mut inner = self.inner.lock().unwrap();
        inner.href = href.to_string();
        inner.navigations += 1;
    }

    /// Number of navigations performed since creation
    pub fn navigation_count(&self) -> u32 {
        self.inner.lock().unwrap().navigations
    }
}
