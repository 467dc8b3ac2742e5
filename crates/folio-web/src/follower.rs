use crate::consts::FOLLOWER_ID;
use crate::dom;
use folio_core::{FollowerSpring, PointerState, FOLLOWER_SIZE_PX};
use glam::Vec2;
use web_sys as web;

/// Decorative dot that trails the pointer with spring physics and swells
/// while a button is held. A shell without the element just has no
/// follower.
pub struct Follower {
    el: web::HtmlElement,
    spring: FollowerSpring,
}

impl Follower {
    pub fn find(document: &web::Document) -> Option<Self> {
        let el = dom::html_element_by_id(document, FOLLOWER_ID)?;
        Some(Self {
            el,
            spring: FollowerSpring::default(),
        })
    }

    /// Advance the spring toward the latest pointer sample and write the
    /// element transform, centering the dot on the pointer.
    pub fn frame(&mut self, pointer: &PointerState, dt_sec: f32) {
        self.spring
            .step(Vec2::new(pointer.x, pointer.y), pointer.down, dt_sec);
        let pos = self.spring.position() - Vec2::splat(FOLLOWER_SIZE_PX * 0.5);
        let transform = format!(
            "translate3d({:.1}px, {:.1}px, 0) scale({:.3})",
            pos.x,
            pos.y,
            self.spring.scale()
        );
        let _ = self.el.style().set_property("transform", &transform);
    }
}
