#![cfg(target_arch = "wasm32")]

pub mod consts;
pub mod dom;
pub mod effects;
pub mod follower;
pub mod frame;
pub mod listener;
pub mod nav;
pub mod page;
pub mod pointer;
pub mod scroll;

use crate::follower::Follower;
use crate::frame::FrameContext;
use crate::listener::EventListener;
use crate::pointer::PointerTracker;
use crate::scroll::ScrollTracker;
use folio_core::{NavState, PointerState};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    if let Err(e) = mount() {
        log::error!("mount error: {e:?}");
    }
    Ok(())
}

/// Everything the mounted page owns: the shared state cells and the RAII
/// listener guards. Dropping a `Page` unwires every handler, so nothing can
/// write to the state cells after teardown.
pub struct Page {
    pub nav_state: Rc<RefCell<NavState>>,
    pub pointer: Rc<RefCell<PointerState>>,
    _nav_links: Vec<EventListener>,
    _menu_toggle: Option<EventListener>,
    _scroll_tracker: ScrollTracker,
    _pointer_tracker: PointerTracker,
}

thread_local! {
    // Keeps the mounted page alive for the page lifetime.
    static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
}

fn mount() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    page::render_content(&document);

    let nav_state = Rc::new(RefCell::new(NavState::default()));
    let pointer = Rc::new(RefCell::new(PointerState::default()));

    let nav_links = nav::wire_nav_links(&document, nav_state.clone())?;
    let menu_toggle = nav::wire_menu_toggle(&document, nav_state.clone())?;
    let scroll_tracker = ScrollTracker::attach(&window, &document, nav_state.clone())?;
    let pointer_tracker = PointerTracker::attach(&window, pointer.clone())?;

    // Initial paint: highlight the default section and reveal whatever is
    // already above the fold.
    nav::apply_active_highlight(&document, nav_state.borrow().active);
    effects::update_reveals(&document, &window);

    let frame_ctx = Rc::new(RefCell::new(FrameContext {
        pointer: pointer.clone(),
        follower: Follower::find(&document),
        blobs: effects::collect_blobs(&document),
        started: Instant::now(),
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);

    PAGE.with(|slot| {
        *slot.borrow_mut() = Some(Page {
            nav_state,
            pointer,
            _nav_links: nav_links,
            _menu_toggle: menu_toggle,
            _scroll_tracker: scroll_tracker,
            _pointer_tracker: pointer_tracker,
        });
    });
    log::info!("[page] mounted");
    Ok(())
}
