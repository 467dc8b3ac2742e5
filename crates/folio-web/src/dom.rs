use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn html_element_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

/// Run `f` over every element matched by `selector`. Bad selectors and
/// non-element nodes yield nothing.
pub fn for_each_element(document: &web::Document, selector: &str, mut f: impl FnMut(web::Element)) {
    if let Ok(list) = document.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(el) = list.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) {
                f(el);
            }
        }
    }
}
