use crate::effects::Blob;
use crate::follower::Follower;
use folio_core::PointerState;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Per-frame state for the decorative animation layer. The frame handler
/// reads the shared pointer cell best-effort (latest value) and never
/// blocks; all timing comes from `instant::Instant` deltas.
pub struct FrameContext {
    pub pointer: Rc<RefCell<PointerState>>,
    pub follower: Option<Follower>,
    pub blobs: Vec<Blob>,
    pub started: Instant,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;
        let elapsed = (now - self.started).as_secs_f32();

        if let Some(follower) = &mut self.follower {
            let pointer = *self.pointer.borrow();
            follower.frame(&pointer, dt_sec);
        }
        for blob in &self.blobs {
            blob.frame(elapsed);
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
