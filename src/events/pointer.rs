use crate::constants::CLICK_SLOP_PX;
use crate::core::GallerySim;
use crate::dom::{self, Listener};
use crate::input;
use crate::ui;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,
    pub sim: Rc<RefCell<GallerySim>>,
    pub mouse: Rc<RefCell<input::MouseState>>,
}

/// Pointer bindings that drive the camera, hover and click-to-open.
///
/// Press is bound on the canvas; move and release on the window so a drag
/// that leaves the canvas still ends cleanly. Listeners detach on
/// [`CameraInput::unsubscribe`] or drop.
pub struct CameraInput {
    listeners: Vec<Listener>,
}

impl CameraInput {
    pub fn subscribe(w: InputWiring) -> Self {
        let mut listeners = vec![pointerdown(&w), pointerleave(&w)];
        if let Some(window) = web::window() {
            let target: &web::EventTarget = window.as_ref();
            listeners.push(pointermove(&w, target));
            listeners.push(pointerup(&w, target, "pointerup"));
            listeners.push(pointerup(&w, target, "pointercancel"));
        }
        dom::set_cursor(&w.canvas, "grab");
        Self { listeners }
    }

    pub fn unsubscribe(&mut self) {
        for l in self.listeners.iter_mut() {
            l.remove();
        }
        self.listeners.clear();
    }
}

fn pointerdown(w: &InputWiring) -> Listener {
    let w = w.clone();
    let target: web::EventTarget = w.canvas.clone().into();
    Listener::new(&target, "pointerdown", move |ev: web::Event| {
        let Ok(ev) = ev.dyn_into::<web::PointerEvent>() else {
            return;
        };
        let client = input::pointer_client(&ev);
        w.sim.borrow_mut().pointer_down(client.x, client.y);
        w.mouse.borrow_mut().press(client.x, client.y);
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
        dom::set_cursor(&w.canvas, "grabbing");
        log::debug!("[pointer] drag begin at ({:.0},{:.0})", client.x, client.y);
        ev.prevent_default();
    })
}

fn pointerleave(w: &InputWiring) -> Listener {
    let w = w.clone();
    let target: web::EventTarget = w.canvas.clone().into();
    Listener::new(&target, "pointerleave", move |_ev: web::Event| {
        w.sim.borrow_mut().clear_hover();
        if !w.mouse.borrow().down {
            dom::set_cursor(&w.canvas, "grab");
        }
    })
}

fn pointermove(w: &InputWiring, target: &web::EventTarget) -> Listener {
    let w = w.clone();
    Listener::new(target, "pointermove", move |ev: web::Event| {
        let Ok(ev) = ev.dyn_into::<web::PointerEvent>() else {
            return;
        };
        let client = input::pointer_client(&ev);
        let px = input::pointer_canvas_px(&ev, &w.canvas);
        {
            let mut ms = w.mouse.borrow_mut();
            ms.x = px.x;
            ms.y = px.y;
            ms.drag_to(client.x, client.y);
        }

        let mut sim = w.sim.borrow_mut();
        sim.pointer_move(client.x, client.y);
        if sim.camera.is_dragging() {
            return;
        }
        let (ro, rd) = sim.camera.pose().screen_ray(
            px.x,
            px.y,
            w.canvas.width() as f32,
            w.canvas.height() as f32,
        );
        let hovered = sim.hover_ray(ro, rd);
        dom::set_cursor(&w.canvas, if hovered.is_some() { "pointer" } else { "grab" });
    })
}

fn pointerup(w: &InputWiring, target: &web::EventTarget, event: &'static str) -> Listener {
    let w = w.clone();
    Listener::new(target, event, move |ev: web::Event| {
        let Ok(ev) = ev.dyn_into::<web::PointerEvent>() else {
            return;
        };
        let was_down = w.mouse.borrow().down;
        if !was_down {
            return;
        }
        let was_click = event == "pointerup" && w.mouse.borrow_mut().release(CLICK_SLOP_PX);
        w.mouse.borrow_mut().down = false;

        let selected = {
            let mut sim = w.sim.borrow_mut();
            sim.pointer_up();
            if was_click && sim.nav.selected().is_none() {
                let px = input::pointer_canvas_px(&ev, &w.canvas);
                let (ro, rd) = sim.camera.pose().screen_ray(
                    px.x,
                    px.y,
                    w.canvas.width() as f32,
                    w.canvas.height() as f32,
                );
                sim.click_ray(ro, rd)
            } else {
                None
            }
        };
        dom::set_cursor(&w.canvas, "grab");
        log::debug!("[pointer] drag end (click={})", was_click);

        if let Some(ev) = selected {
            let transitioning = w.sim.borrow().nav.is_transitioning();
            ui::apply(&w.document, &ev, transitioning);
        }
    })
}
