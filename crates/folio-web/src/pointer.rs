use crate::listener::EventListener;
use folio_core::{PointerSample, PointerState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Feeds the shared pointer cell from the window's pointer events for the
/// lifetime of the tracker. Dropping it removes all three listeners; events
/// dispatched afterwards no longer touch the state.
pub struct PointerTracker {
    _listeners: [EventListener; 3],
}

impl PointerTracker {
    pub fn attach(window: &web::Window, state: Rc<RefCell<PointerState>>) -> anyhow::Result<Self> {
        let on_move = {
            let state = state.clone();
            EventListener::add(window, "pointermove", move |ev| {
                let ev: web::PointerEvent = ev.unchecked_into();
                state.borrow_mut().apply(PointerSample::Move {
                    x: ev.client_x() as f32,
                    y: ev.client_y() as f32,
                });
            })?
        };
        let on_down = {
            let state = state.clone();
            EventListener::add(window, "pointerdown", move |_ev| {
                state.borrow_mut().apply(PointerSample::Down);
            })?
        };
        let on_up = {
            let state = state.clone();
            EventListener::add(window, "pointerup", move |_ev| {
                state.borrow_mut().apply(PointerSample::Up);
            })?
        };
        Ok(Self {
            _listeners: [on_move, on_down, on_up],
        })
    }
}
