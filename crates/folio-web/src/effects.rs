use crate::consts::{BLOB_ID_PREFIX, REVEALED_CLASS, REVEAL_SELECTOR};
use crate::dom;
use folio_core::{BlobDrift, BLOB_DRIFTS, REVEAL_VIEWPORT_FRACTION};
use web_sys as web;

/// One floating background blob: a fixed element pushed around its CSS
/// anchor by a closed drift loop.
pub struct Blob {
    el: web::HtmlElement,
    drift: BlobDrift,
}

impl Blob {
    pub fn frame(&self, elapsed_secs: f32) {
        let off = self.drift.offset_at(elapsed_secs);
        let _ = self.el.style().set_property(
            "transform",
            &format!("translate3d({:.1}px, {:.1}px, 0)", off.x, off.y),
        );
    }
}

/// Pair up `#blob-N` elements with their drift configs. Missing elements
/// are skipped.
pub fn collect_blobs(document: &web::Document) -> Vec<Blob> {
    let mut blobs = Vec::new();
    for (i, drift) in BLOB_DRIFTS.iter().enumerate() {
        let id = format!("{BLOB_ID_PREFIX}{i}");
        if let Some(el) = dom::html_element_by_id(document, &id) {
            blobs.push(Blob { el, drift: *drift });
        }
    }
    blobs
}

/// Reveal `[data-reveal]` elements whose top edge has cleared the trigger
/// line. Revealed elements keep their class, so scrolling back up never
/// hides them again.
pub fn update_reveals(document: &web::Document, window: &web::Window) {
    let viewport_h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let trigger = viewport_h * REVEAL_VIEWPORT_FRACTION;
    dom::for_each_element(document, REVEAL_SELECTOR, |el| {
        if el.class_list().contains(REVEALED_CLASS) {
            return;
        }
        let top = el.get_bounding_client_rect().top();
        if top < trigger {
            let _ = el.class_list().add_1(REVEALED_CLASS);
        }
    });
}
