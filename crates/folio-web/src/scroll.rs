use crate::effects;
use crate::listener::EventListener;
use crate::nav;
use folio_core::{active_section, NavState, Section, SectionRect};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Look up a section's vertical extent from the live document. `None` means
/// the element is missing and the section is skipped for this tick.
pub fn section_rect(document: &web::Document, section: Section) -> Option<SectionRect> {
    let el = document.get_element_by_id(section.id())?;
    let el: web::HtmlElement = el.dyn_into().ok()?;
    Some(SectionRect {
        top: el.offset_top() as f64,
        height: el.offset_height() as f64,
    })
}

/// Watches the window's scroll position and keeps the shared nav state's
/// active section current. Geometry is re-read from the document on every
/// event; a tick with no matching section keeps the previous value.
///
/// Subscribed for the page lifetime; dropping the tracker removes the
/// listener.
pub struct ScrollTracker {
    _listener: EventListener,
}

impl ScrollTracker {
    pub fn attach(
        window: &web::Window,
        document: &web::Document,
        nav_state: Rc<RefCell<NavState>>,
    ) -> anyhow::Result<Self> {
        let doc = document.clone();
        let listener = EventListener::add(window, "scroll", move |_ev| {
            if let Some(win) = web::window() {
                let scroll_y = win.scroll_y().unwrap_or(0.0);
                if let Some(next) = active_section(scroll_y, |s| section_rect(&doc, s)) {
                    if nav_state.borrow_mut().set_active(next) {
                        nav::apply_active_highlight(&doc, next);
                    }
                }
                effects::update_reveals(&doc, &win);
            }
        })?;
        Ok(Self {
            _listener: listener,
        })
    }
}
