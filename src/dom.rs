use crate::constants::{CANVAS_MAX_HEIGHT_PX, CANVAS_MIN_HEIGHT_PX, CANVAS_VIEWPORT_HEIGHT_FRACTION};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Attach `handler` to `event` on the element with `element_id`. Missing
/// elements are skipped so optional controls can be left out of the page.
pub fn add_event_listener(
    document: &web::Document,
    element_id: &str,
    event: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    handler: impl FnMut() + 'static,
) {
    add_event_listener(document, element_id, "click", handler);
}

pub fn input_value(document: &web::Document, element_id: &str) -> Option<String> {
    let el = document.get_element_by_id(element_id)?;
    if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
        return Some(input.value());
    }
    el.dyn_ref::<web::HtmlSelectElement>().map(|s| s.value())
}

pub fn input_number(document: &web::Document, element_id: &str) -> Option<f32> {
    input_value(document, element_id)?.trim().parse::<f32>().ok()
}

pub fn input_checked(document: &web::Document, element_id: &str) -> Option<bool> {
    document
        .get_element_by_id(element_id)?
        .dyn_into::<web::HtmlInputElement>()
        .ok()
        .map(|i| i.checked())
}

pub fn input_file(document: &web::Document, element_id: &str) -> Option<web::File> {
    document
        .get_element_by_id(element_id)?
        .dyn_into::<web::HtmlInputElement>()
        .ok()?
        .files()?
        .get(0)
}

#[inline]
pub fn set_text(document: &web::Document, element_id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        el.set_text_content(Some(text));
    }
}

#[inline]
pub fn set_hidden(document: &web::Document, element_id: &str, hidden: bool) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let cl = el.class_list();
        _ = if hidden {
            cl.add_1("hidden")
        } else {
            cl.remove_1("hidden")
        };
    }
}

pub fn alert(message: &str) {
    if let Some(w) = web::window() {
        _ = w.alert_with_message(message);
    }
}

/// Canvas fills its parent's width; height follows the viewport within limits.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    let Some(w) = web::window() else {
        return;
    };
    let width = canvas
        .parent_element()
        .map(|p| p.get_bounding_client_rect().width())
        .unwrap_or_else(|| canvas.get_bounding_client_rect().width());
    let viewport_h = w
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(CANVAS_MIN_HEIGHT_PX);
    let height = (viewport_h * CANVAS_VIEWPORT_HEIGHT_FRACTION)
        .clamp(CANVAS_MIN_HEIGHT_PX, CANVAS_MAX_HEIGHT_PX);
    canvas.set_width((width as u32).max(1));
    canvas.set_height((height as u32).max(1));
}
