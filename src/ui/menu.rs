//! Visual and ARIA state for the mobile menu
//!
//! The menu's open/closed state lives on the page as a styling class on the
//! toggle control and menu container plus an expanded-state attribute on
//! the toggle. This module owns the two element handles and applies state
//! changes to them; it decides nothing about when those changes happen.

use crate::page::element::Element;

/// Class marking the toggle and menu as visually open
pub const ACTIVE_CLASS: &str = "active";

/// Attribute reflecting open/closed state to assistive technology
pub const EXPANDED_ATTRIBUTE: &str = "aria-expanded";

/// Applies menu state to the toggle control and menu container
#[derive(Clone)]
pub struct MenuVisuals {
    toggle: Element,
    menu: Element,
}

impl MenuVisuals {
    /// Creates the visual layer over the two injected elements
    pub fn new(toggle: Element, menu: Element) -> Self {
        Self { toggle, menu }
    }

    /// Flips the active class on both elements
    ///
    /// A toggle click always writes `"true"` to the expanded attribute;
    /// only [`close`](Self::close) writes `"false"`.
    pub fn toggle(&self) {
        self.toggle.toggle_class(ACTIVE_CLASS);
        self.menu.toggle_class(ACTIVE_CLASS);
        self.toggle.set_attribute(EXPANDED_ATTRIBUTE, "true");
    }

    /// Removes the active class from both elements and reports collapsed
    pub fn close(&self) {
        self.toggle.remove_class(ACTIVE_CLASS);
        self.menu.remove_class(ACTIVE_CLASS);
        self.toggle.set_attribute(EXPANDED_ATTRIBUTE, "false");
    }

    /// Returns true if the menu container currently carries the active class
    pub fn is_open(&self) -> bool {
        self.menu.has_class(ACTIVE_CLASS)
    }

    /// The toggle control handle
    pub fn toggle_control(&self) -> &Element {
        &self.toggle
    }

    /// The menu container handle
    pub fn menu_container(&self) -> &Element {
        &self.menu
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_visuals() -> MenuVisuals {
        let toggle = Element::with_class("menu-toggle");
        let menu = Element::with_class("nav-menu");
        MenuVisuals::new(toggle, menu)
    }

    #[test]
    fn starts_closed() {
        let visuals = sample_visuals();
        assert!(!visuals.is_open());
        assert!(!visuals.toggle_control().has_class(ACTIVE_CLASS));
        assert!(!visuals.menu_container().has_class(ACTIVE_CLASS));
    }

    #[test]
    fn toggle_opens_and_reports_expanded() {
        let visuals = sample_visuals();

        visuals.toggle();

        assert!(visuals.is_open());
        assert!(visuals.toggle_control().has_class(ACTIVE_CLASS));
        assert!(visuals.menu_container().has_class(ACTIVE_CLASS));
        assert_eq!(
            visuals.toggle_control().attribute(EXPANDED_ATTRIBUTE),
            Some("true".to_string())
        );
    }

    #[test]
    fn double_toggle_restores_the_class_state() {
        let visuals = sample_visuals();

        visuals.toggle();
        visuals.toggle();

        assert!(!visuals.is_open());
        assert!(!visuals.toggle_control().has_class(ACTIVE_CLASS));
        assert!(!visuals.menu_container().has_class(ACTIVE_CLASS));
        // The expanded attribute stays "true": every toggle click writes it.
        assert_eq!(
            visuals.toggle_control().attribute(EXPANDED_ATTRIBUTE),
            Some("true".to_string())
        );
    }

    #[test]
    fn close_clears_classes_and_reports_collapsed() {
        let visuals = sample_visuals();

        visuals.toggle();
        visuals.close();

        assert!(!visuals.is_open());
        assert!(!visuals.toggle_control().has_class(ACTIVE_CLASS));
        assert!(!visuals.menu_container().has_class(ACTIVE_CLASS));
        assert_eq!(
            visuals.toggle_control().attribute(EXPANDED_ATTRIBUTE),
            Some("false".to_string())
        );
    }

    #[test]
    fn close_is_idempotent() {
        let visuals = sample_visuals();

        visuals.close();
        visuals.close();

        assert!(!visuals.is_open());
        assert_eq!(
            visuals.toggle_control().attribute(EXPANDED_ATTRIBUTE),
            Some("false".to_string())
        );
    }

    #[test]
    fn only_the_active_class_is_touched() {
        let visuals = sample_visuals();

        visuals.toggle();
        visuals.close();

        assert_eq!(visuals.toggle_control().class_names(), vec!["menu-toggle"]);
        assert_eq!(visuals.menu_container().class_names(), vec!["nav-menu"]);
    }
}
