use crate::constants::MAX_DEVICE_PIXEL_RATIO;
use crate::input;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// An event listener that stays registered for as long as this value lives.
///
/// Dropping it (or calling [`Listener::remove`]) detaches the callback and
/// frees the closure.
pub struct Listener {
    target: web::EventTarget,
    event: &'static str,
    closure: Option<Closure<dyn FnMut(web::Event)>>,
}

impl Listener {
    pub fn new(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Self {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        let callback: &js_sys::Function = closure.as_ref().unchecked_ref();
        if let Err(e) = target.add_event_listener_with_callback(event, callback) {
            log::warn!("[dom] add {} listener failed: {:?}", event, e);
        }
        Self {
            target: target.clone(),
            event,
            closure: Some(closure),
        }
    }

    pub fn remove(&mut self) {
        if let Some(closure) = self.closure.take() {
            _ = self
                .target
                .remove_event_listener_with_callback(self.event, closure.as_ref().unchecked_ref());
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        self.remove();
    }
}

pub fn set_text(document: &web::Document, element_id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        el.set_text_content(Some(text));
    }
}

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

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let rect = canvas.get_bounding_client_rect();
        let [w_px, h_px] = input::backing_size(
            rect.width(),
            rect.height(),
            w.device_pixel_ratio(),
            MAX_DEVICE_PIXEL_RATIO,
        );
        canvas.set_width(w_px);
        canvas.set_height(h_px);
    }
}

pub fn set_cursor(canvas: &web::HtmlCanvasElement, cursor: &str) {
    _ = canvas.style().set_property("cursor", cursor);
}
