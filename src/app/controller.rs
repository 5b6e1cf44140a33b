//! Page controller and wiring layer
//!
//! The controller is the single initializer of the interaction layer: it
//! validates bindings, looks up the elements the hosting page promises to
//! expose, and attaches the listeners that drive the menu state machine.
//! The redirect operations live here too, alongside the error-page wiring.

use std::sync::{Arc, Mutex};

use thiserror::Error;

use crate::app::state::{MenuMachine, MenuState, PageEvent};
use crate::config::bindings::{BindingsError, PageBindings};
use crate::domain::nav::NavTarget;
use crate::page::document::Document;
use crate::page::element::Element;
use crate::page::events::EventKind;
use crate::page::location::Location;
use crate::ui::menu::MenuVisuals;

/// Fatal initialization errors raised while wiring a page
///
/// A page missing one of its promised elements is malformed; wiring fails
/// loudly instead of skipping the element.
#[derive(Debug, Error)]
pub enum WiringError {
    /// The bindings themselves are unusable
    #[error(transparent)]
    InvalidBindings(#[from] BindingsError),
    /// No element carries the toggle class
    #[error("no element carries the toggle class '{0}'")]
    MissingToggle(String),
    /// No element carries the menu class
    #[error("no element carries the menu class '{0}'")]
    MissingMenu(String),
    /// No element carries the nav-link class
    #[error("no element carries the nav-link class '{0}'")]
    NoNavLinks(String),
    /// No element has the try-again id
    #[error("no element has the try-again id '{0}'")]
    MissingTryAgain(String),
}

/// Navigates the browsing context to the home page
pub fn go_to_homepage(location: &Location) {
    location.assign(NavTarget::Homepage.relative_path());
}

/// Navigates the browsing context to the mailing-list members page
pub fn go_to_mailing_list(location: &Location) {
    location.assign(NavTarget::MailingMembers.relative_path());
}

/// Wires the error page's try-again control
///
/// Fails if the control is absent. Deliberate quirk carried over from the
/// shipped behavior: the homepage redirect fires here, once, at wiring
/// time, and no click handler is attached to the control — a later click
/// on it does not navigate. See DESIGN.md.
pub fn wire_error_page(
    document: &Document,
    location: &Location,
    bindings: &PageBindings,
) -> Result<(), WiringError> {
    bindings.validate()?;

    let _try_again = document
        .element_by_id(&bindings.try_again_id)
        .ok_or_else(|| WiringError::MissingTryAgain(bindings.try_again_id.clone()))?;

    tracing::info!("Error page wired; redirecting to {}", NavTarget::Homepage);
    go_to_homepage(location);

    Ok(())
}

/// Controller over a wired page
///
/// Holds the injected element references and the shared menu state. All
/// menu transitions run inside listeners registered by [`wire`](Self::wire);
/// the controller itself only offers introspection afterwards.
pub struct PageController {
    /// Current menu state, shared with the registered listeners
    state: Arc<Mutex<MenuState>>,
    /// Visual layer over the toggle control and menu container
    visuals: MenuVisuals,
    /// Every wired navigation link, in document order
    links: Vec<Element>,
}

impl PageController {
    /// Wires the mobile menu on a hosting page
    ///
    /// Looks up the toggle control (first element with the toggle class),
    /// the menu container (first element with the menu class) and every
    /// navigation link, then attaches:
    /// - a click listener on the toggle (strict state flip),
    /// - a blur listener on the toggle (unconditional close),
    /// - a click listener on each link (unconditional close).
    ///
    /// # Arguments
    /// * `document` - The hosting page's elements
    /// * `bindings` - Class and id names locating the elements
    ///
    /// # Returns
    /// The wired controller, or a [`WiringError`] naming the binding that
    /// failed to resolve.
    pub fn wire(document: &Document, bindings: &PageBindings) -> Result<Self, WiringError> {
        bindings.validate()?;

        let toggle = document
            .first_by_class(&bindings.toggle_class)
            .ok_or_else(|| WiringError::MissingToggle(bindings.toggle_class.clone()))?;
        let menu = document
            .first_by_class(&bindings.menu_class)
            .ok_or_else(|| WiringError::MissingMenu(bindings.menu_class.clone()))?;
        let links = document.all_by_class(&bindings.link_class);
        if links.is_empty() {
            return Err(WiringError::NoNavLinks(bindings.link_class.clone()));
        }

        let state = Arc::new(Mutex::new(MenuState::default()));
        let visuals = MenuVisuals::new(toggle.clone(), menu);

        let state_for_click = Arc::clone(&state);
        let visuals_for_click = visuals.clone();
        toggle.add_listener(
            EventKind::Click,
            Arc::new(move || {
                Self::apply(&state_for_click, &visuals_for_click, PageEvent::ToggleClicked);
            }),
        );

        let state_for_blur = Arc::clone(&state);
        let visuals_for_blur = visuals.clone();
        toggle.add_listener(
            EventKind::Blur,
            Arc::new(move || {
                Self::apply(&state_for_blur, &visuals_for_blur, PageEvent::ToggleBlurred);
            }),
        );

        for link in &links {
            let state_for_link = Arc::clone(&state);
            let visuals_for_link = visuals.clone();
            link.add_listener(
                EventKind::Click,
                Arc::new(move || {
                    Self::apply(&state_for_link, &visuals_for_link, PageEvent::NavLinkClicked);
                }),
            );
        }

        tracing::info!("Menu wired: {} nav link(s)", links.len());

        Ok(Self {
            state,
            visuals,
            links,
        })
    }

    /// Runs one page event through the state machine and applies the
    /// resulting visual effect
    fn apply(state: &Arc<Mutex<MenuState>>, visuals: &MenuVisuals, event: PageEvent) {
        let mut state_guard = state.lock().unwrap();
        *state_guard = MenuMachine::process_event(*state_guard, event);

        match event {
            PageEvent::ToggleClicked => visuals.toggle(),
            PageEvent::ToggleBlurred | PageEvent::NavLinkClicked => visuals.close(),
        }
    }

    /// Current menu state
    pub fn menu_state(&self) -> MenuState {
        *self.state.lock().unwrap()
    }

    /// Returns true if the menu is open
    pub fn is_menu_open(&self) -> bool {
        self.menu_state().is_open()
    }

    /// Number of navigation links wired by the initializer
    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// The visual layer over the toggle control and menu container
    pub fn visuals(&self) -> &MenuVisuals {
        &self.visuals
    }
}
