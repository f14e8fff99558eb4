//! DOM lookup and geometry helpers

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::Rect;
use crate::error::FxError;

pub fn window() -> Result<Window, FxError> {
    web_sys::window().ok_or_else(|| FxError::MissingElement("window".into()))
}

pub fn document() -> Result<Document, FxError> {
    window()?
        .document()
        .ok_or_else(|| FxError::MissingElement("document".into()))
}

/// Element by id
pub fn by_id(document: &Document, id: &str) -> Result<Element, FxError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| FxError::MissingElement(format!("#{id}")))
}

/// HTML element by id
pub fn html_by_id(document: &Document, id: &str) -> Result<HtmlElement, FxError> {
    by_id(document, id)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| FxError::WrongElementType(format!("#{id}")))
}

/// All elements matching `selector`, in document order
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        log::warn!("Bad selector {selector}");
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Viewport size in CSS pixels
pub fn viewport_size() -> (f64, f64) {
    let Some(win) = web_sys::window() else {
        return (1280.0, 720.0);
    };
    let width = win
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1280.0);
    let height = win
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(720.0);
    (width, height)
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn rect_of(element: &Element) -> Rect {
    let r = element.get_bounding_client_rect();
    Rect::new(
        r.left() as f32,
        r.top() as f32,
        r.width() as f32,
        r.height() as f32,
    )
}

pub fn system_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

/// Toggle or set a class, ignoring DOM errors
pub fn set_class(element: &Element, class: &str, on: bool) {
    let list = element.class_list();
    let _ = if on { list.add_1(class) } else { list.remove_1(class) };
}
