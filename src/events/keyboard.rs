use crate::core::GallerySim;
use crate::dom::Listener;
use crate::ui;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_keydown(ev: &web::KeyboardEvent, sim: &Rc<RefCell<GallerySim>>, document: &web::Document) {
    let key = ev.key();
    let (nav_ev, transitioning) = {
        let mut s = sim.borrow_mut();
        let nav_ev = s.handle_key(&key);
        (nav_ev, s.nav.is_transitioning())
    };
    if let Some(nav_ev) = nav_ev {
        ui::apply(document, &nav_ev, transitioning);
        ev.prevent_default();
    }
}

/// Window keydown binding for wall stepping and closing the detail view.
pub struct KeyboardInput {
    listener: Option<Listener>,
}

impl KeyboardInput {
    pub fn subscribe(sim: Rc<RefCell<GallerySim>>, document: web::Document) -> Self {
        let listener = web::window().map(|window| {
            let target: &web::EventTarget = window.as_ref();
            Listener::new(target, "keydown", move |ev: web::Event| {
                if let Ok(ev) = ev.dyn_into::<web::KeyboardEvent>() {
                    handle_keydown(&ev, &sim, &document);
                }
            })
        });
        Self { listener }
    }

    pub fn unsubscribe(&mut self) {
        if let Some(mut l) = self.listener.take() {
            l.remove();
        }
    }
}
