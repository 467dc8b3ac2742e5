use crate::consts::{
    ACTIVE_CLASS, MENU_PANEL_ID, MENU_TOGGLE_ID, NAV_HIGHLIGHT_SELECTOR, NAV_LINK_SELECTOR,
    OPEN_CLASS,
};
use crate::dom;
use crate::listener::EventListener;
use folio_core::{NavState, Section};
use std::cell::RefCell;
use std::rc::Rc;
use std::str::FromStr;
use web_sys as web;

/// Handle a navigation intent for `target` (the value of a link's
/// `data-section` attribute).
///
/// A known target with a rendered element gets a native smooth scroll; an
/// unknown target or missing element is a no-op. The mobile menu closes in
/// every case.
pub fn navigate(document: &web::Document, nav_state: &Rc<RefCell<NavState>>, target: &str) {
    match Section::from_str(target) {
        Ok(section) => {
            if let Some(el) = document.get_element_by_id(section.id()) {
                let opts = web::ScrollIntoViewOptions::new();
                opts.set_behavior(web::ScrollBehavior::Smooth);
                el.scroll_into_view_with_scroll_into_view_options(&opts);
                log::debug!("[nav] scroll to {}", section);
            }
        }
        Err(e) => log::debug!("[nav] ignoring click: {e}"),
    }
    nav_state.borrow_mut().close_menu();
    sync_menu(document, false);
}

/// Attach a click handler to every nav link (desktop bar and mobile panel).
pub fn wire_nav_links(
    document: &web::Document,
    nav_state: Rc<RefCell<NavState>>,
) -> anyhow::Result<Vec<EventListener>> {
    let mut links = Vec::new();
    dom::for_each_element(document, NAV_LINK_SELECTOR, |el| {
        if let Some(target) = el.get_attribute("data-section") {
            links.push((el, target));
        }
    });

    let mut listeners = Vec::with_capacity(links.len());
    for (el, target) in links {
        let doc = document.clone();
        let state = nav_state.clone();
        listeners.push(EventListener::add(&el, "click", move |_ev| {
            navigate(&doc, &state, &target);
        })?);
    }
    log::info!("[nav] wired {} nav links", listeners.len());
    Ok(listeners)
}

/// Attach the mobile menu toggle. Pages without the button (desktop-only
/// shells) simply get no listener.
pub fn wire_menu_toggle(
    document: &web::Document,
    nav_state: Rc<RefCell<NavState>>,
) -> anyhow::Result<Option<EventListener>> {
    let button = match document.get_element_by_id(MENU_TOGGLE_ID) {
        Some(b) => b,
        None => return Ok(None),
    };
    let doc = document.clone();
    let listener = EventListener::add(&button, "click", move |_ev| {
        let open = {
            let mut state = nav_state.borrow_mut();
            state.toggle_menu();
            state.menu_open
        };
        sync_menu(&doc, open);
    })?;
    Ok(Some(listener))
}

/// Mirror the menu-open flag into the DOM: panel class and toggle state.
pub fn sync_menu(document: &web::Document, open: bool) {
    if let Some(panel) = document.get_element_by_id(MENU_PANEL_ID) {
        let list = panel.class_list();
        let _ = if open {
            list.add_1(OPEN_CLASS)
        } else {
            list.remove_1(OPEN_CLASS)
        };
    }
    if let Some(button) = document.get_element_by_id(MENU_TOGGLE_ID) {
        let _ = button.set_attribute("aria-expanded", if open { "true" } else { "false" });
    }
}

/// Put the `active` class on the nav links for `active` and strip it from
/// the rest. Only actual nav links are highlighted; other elements with a
/// `data-section` (the hero buttons) just navigate.
pub fn apply_active_highlight(document: &web::Document, active: Section) {
    dom::for_each_element(document, NAV_HIGHLIGHT_SELECTOR, |el| {
        let is_active = el.get_attribute("data-section").as_deref() == Some(active.id());
        let list = el.class_list();
        let _ = if is_active {
            list.add_1(ACTIVE_CLASS)
        } else {
            list.remove_1(ACTIVE_CLASS)
        };
    });
}
