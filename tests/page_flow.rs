//! End-to-end flows through a wired page
//!
//! Builds the page a real host would expose (toggle, menu, nav links,
//! error-page control), wires it, and drives it through user events.

use navwire::{
    wire_error_page, Document, Element, Location, PageBindings, PageController, WiringError,
    ACTIVE_CLASS, EXPANDED_ATTRIBUTE,
};

fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// The hosting site's navigation page: one toggle, one menu, links to the
/// site's sections.
fn site_page() -> (Document, Element, Element, Vec<Element>) {
    let mut document = Document::new();

    let toggle = document.insert(Element::with_class("menu-toggle"));
    toggle.set_attribute(EXPANDED_ATTRIBUTE, "false");

    let menu = document.insert(Element::with_class("nav-menu"));

    let mut links = Vec::new();
    for id in ["nav-home", "nav-mailing", "nav-about"] {
        let link = document.insert(Element::with_class("nav-link"));
        link.set_id(id);
        links.push(link);
    }

    (document, toggle, menu, links)
}

#[test]
fn menu_opens_on_toggle_and_closes_on_link_click() {
    init_logging();
    let (document, toggle, menu, links) = site_page();
    let controller = PageController::wire(&document, &PageBindings::default())
        .expect("site page should wire cleanly");

    toggle.click();

    assert!(controller.is_menu_open());
    assert!(toggle.has_class(ACTIVE_CLASS));
    assert!(menu.has_class(ACTIVE_CLASS));
    assert_eq!(toggle.attribute(EXPANDED_ATTRIBUTE).as_deref(), Some("true"));

    links[0].click();

    assert!(!controller.is_menu_open());
    assert!(!toggle.has_class(ACTIVE_CLASS));
    assert!(!menu.has_class(ACTIVE_CLASS));
    assert_eq!(toggle.attribute(EXPANDED_ATTRIBUTE).as_deref(), Some("false"));
}

#[test]
fn blur_closes_an_open_menu() {
    init_logging();
    let (document, toggle, menu, _links) = site_page();
    let controller = PageController::wire(&document, &PageBindings::default())
        .expect("site page should wire cleanly");

    toggle.click();
    assert!(controller.is_menu_open());

    toggle.blur();

    assert!(!controller.is_menu_open());
    assert!(!toggle.has_class(ACTIVE_CLASS));
    assert!(!menu.has_class(ACTIVE_CLASS));
    assert_eq!(toggle.attribute(EXPANDED_ATTRIBUTE).as_deref(), Some("false"));
}

#[test]
fn repeated_sessions_keep_state_and_page_in_step() {
    init_logging();
    let (document, toggle, _menu, links) = site_page();
    let controller = PageController::wire(&document, &PageBindings::default())
        .expect("site page should wire cleanly");

    // Open/close a few times through different close paths.
    for link in &links {
        toggle.click();
        assert!(controller.is_menu_open());
        assert!(controller.visuals().is_open());

        link.click();
        assert!(!controller.is_menu_open());
        assert!(!controller.visuals().is_open());
    }

    toggle.click();
    toggle.blur();
    assert!(!controller.is_menu_open());
    assert!(!controller.visuals().is_open());
}

#[test]
fn error_page_redirects_home_at_wiring_time() {
    init_logging();
    let mut document = Document::new();
    let try_again = document.insert(Element::with_id("error-try-again"));
    let location = Location::new("/general/error");

    wire_error_page(&document, &location, &PageBindings::default())
        .expect("error page should wire");

    assert_eq!(location.href(), "../general/home");
    assert_eq!(location.navigation_count(), 1);

    // The try-again control got no handler; clicking it changes nothing.
    try_again.click();
    assert_eq!(location.href(), "../general/home");
    assert_eq!(location.navigation_count(), 1);
}

#[test]
fn malformed_pages_fail_wiring() {
    init_logging();

    // No toggle at all.
    let mut no_toggle = Document::new();
    no_toggle.insert(Element::with_class("nav-menu"));
    no_toggle.insert(Element::with_class("nav-link"));
    assert!(matches!(
        PageController::wire(&no_toggle, &PageBindings::default()),
        Err(WiringError::MissingToggle(_))
    ));

    // Toggle and menu present but not a single nav link.
    let mut no_links = Document::new();
    no_links.insert(Element::with_class("menu-toggle"));
    no_links.insert(Element::with_class("nav-menu"));
    assert!(matches!(
        PageController::wire(&no_links, &PageBindings::default()),
        Err(WiringError::NoNavLinks(_))
    ));

    // Error page without its try-again control.
    let location = Location::new("/general/error");
    assert!(matches!(
        wire_error_page(&Document::new(), &location, &PageBindings::default()),
        Err(WiringError::MissingTryAgain(_))
    ));
    assert_eq!(location.navigation_count(), 0);
}
