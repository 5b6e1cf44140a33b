//! Menu state machine
//!
//! Defines the open/closed state of the mobile navigation menu and the
//! transitions page events drive. The toggle control is a strict flip; the
//! close paths are unconditional, whatever the current state.

/// Open/closed state of the mobile navigation menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    /// The menu is collapsed; this is the initial state
    Closed,
    /// The menu is expanded over the page
    Open,
}

impl MenuState {
    /// Returns true if the menu is open
    pub fn is_open(&self) -> bool {
        matches!(self, MenuState::Open)
    }

    /// Returns the opposite state
    pub fn flipped(&self) -> MenuState {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }
}

impl Default for MenuState {
    fn default() -> Self {
        Self::Closed
    }
}

/// Page events that drive menu transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEvent {
    /// The toggle control was clicked
    ToggleClicked,
    /// The toggle control lost focus
    ToggleBlurred,
    /// A navigation link was clicked
    NavLinkClicked,
}

/// State machine for menu transitions
pub struct MenuMachine;

impl MenuMachine {
    /// Processes a page event and returns the new menu state
    ///
    /// A toggle click never consults the current state beyond flipping it;
    /// blur and link clicks close regardless of the current state.
    ///
    /// # Arguments
    /// * `current_state` - Menu state before the event
    /// * `event` - Event to process
    ///
    /// # Returns
    /// Menu state after processing the event
    pub fn process_event(current_state: MenuState, event: PageEvent) -> MenuState {
        let new_state = match (current_state, event) {
            // Strict flip: a click on the toggle always inverts.
            (state, PageEvent::ToggleClicked) => state.flipped(),

            // Unconditional close, whatever the state was.
            (_, PageEvent::ToggleBlurred) => MenuState::Closed,
            (_, PageEvent::NavLinkClicked) => MenuState::Closed,
        };

        if new_state != current_state {
            tracing::debug!("Menu state {:?} -> {:?} on {:?}", current_state, new_state, event);
        }

        new_state
    }
}
