//! Bindings between the wiring step and the hosting page's markup
//!
//! The hosting page identifies its interaction elements by class and id.
//! [`PageBindings`] concentrates those names so the wiring step never
//! hard-codes a selector, and validates them before any lookup runs.

use thiserror::Error;

/// Class and id names the wiring step uses to locate its elements
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageBindings {
    /// Class carried by the menu toggle control
    pub toggle_class: String,
    /// Class carried by the menu container
    pub menu_class: String,
    /// Class carried by every navigation link
    pub link_class: String,
    /// Id of the try-again control on the error page
    pub try_again_id: String,
}

impl PageBindings {
    pub const DEFAULT_TOGGLE_CLASS: &'static str = "menu-toggle";
    pub const DEFAULT_MENU_CLASS: &'static str = "nav-menu";
    pub const DEFAULT_LINK_CLASS: &'static str = "nav-link";
    pub const DEFAULT_TRY_AGAIN_ID: &'static str = "error-try-again";

    /// Checks that no binding is empty or blank
    ///
    /// A blank binding can never match an element, so it is rejected up
    /// front instead of surfacing later as a confusing missing-element
    /// failure.
    pub fn validate(&self) -> Result<(), BindingsError> {
        Self::require_non_blank("toggle_class", &self.toggle_class)?;
        Self::require_non_blank("menu_class", &self.menu_class)?;
        Self::require_non_blank("link_class", &self.link_class)?;
        Self::require_non_blank("try_again_id", &self.try_again_id)?;
        Ok(())
    }

    fn require_non_blank(name: &'static str, value: &str) -> Result<(), BindingsError> {
        if value.trim().is_empty() {
            return Err(BindingsError::BlankBinding { name });
        }
        Ok(())
    }
}

impl Default for PageBindings {
    fn default() -> Self {
        Self {
            toggle_class: Self::DEFAULT_TOGGLE_CLASS.to_string(),
            menu_class: Self::DEFAULT_MENU_CLASS.to_string(),
            link_class: Self::DEFAULT_LINK_CLASS.to_string(),
            try_again_id: Self::DEFAULT_TRY_AGAIN_ID.to_string(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BindingsError {
    #[error("binding '{name}' must not be empty or blank")]
    BlankBinding { name: &'static str },
}
