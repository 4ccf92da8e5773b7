#![cfg(target_arch = "wasm32")]
use crate::constants::{
    CANVAS_ID, MODAL_BACKDROP_ID, MODAL_CLOSE_ID, NEXT_BUTTON_ID, PREV_BUTTON_ID,
};
use crate::core::{ArtPiece, GalleryConfig, GallerySim, NavEvent, COLLECTION};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod artwork;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod render;
mod ui;

static GALLERY: [ArtPiece; 4] = COLLECTION;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

/// Button clicks share one path: run a sim action, mirror the result in the page.
fn wire_button(
    document: &web::Document,
    element_id: &str,
    sim: &Rc<RefCell<GallerySim>>,
    action: fn(&mut GallerySim) -> Option<NavEvent<'static>>,
) {
    let sim = sim.clone();
    let doc = document.clone();
    dom::add_click_listener(document, element_id, move || {
        let (ev, transitioning) = {
            let mut s = sim.borrow_mut();
            let ev = action(&mut s);
            (ev, s.nav.is_transitioning())
        };
        if let Some(ev) = ev {
            ui::apply(&doc, &ev, transitioning);
        }
    });
}

fn wire_nav_buttons(document: &web::Document, sim: &Rc<RefCell<GallerySim>>) {
    wire_button(document, PREV_BUTTON_ID, sim, GallerySim::prev_wall);
    wire_button(document, NEXT_BUTTON_ID, sim, GallerySim::next_wall);
    wire_button(document, MODAL_CLOSE_ID, sim, GallerySim::close_selection);
    wire_button(document, MODAL_BACKDROP_ID, sim, GallerySim::close_selection);
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("gallery-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    wire_canvas_resize(&canvas);

    let config = GalleryConfig::default();
    config.validate()?;
    let sim = Rc::new(RefCell::new(GallerySim::new(
        &config,
        &GALLERY,
        rand::random::<u64>(),
    )));
    {
        let s = sim.borrow();
        let wall = s.nav.current_wall();
        ui::update_wall_nav(&document, wall, false);
        ui::update_info(&document, s.nav.current_piece());
        log::info!(
            "[gallery] {} pieces, starting at {} with {} dust motes",
            s.nav.collection().len(),
            wall.name(),
            s.dust.len()
        );
    }
    wire_nav_buttons(&document, &sim);

    let mouse = Rc::new(RefCell::new(input::MouseState::default()));
    let camera_input = events::CameraInput::subscribe(events::InputWiring {
        canvas: canvas.clone(),
        document: document.clone(),
        sim: sim.clone(),
        mouse,
    });
    let keyboard_input = events::KeyboardInput::subscribe(sim.clone(), document.clone());

    let gpu = frame::init_gpu(&canvas, config.particles.count).await;
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        sim,
        canvas,
        document,
        gpu,
        camera_input,
        keyboard_input,
        last_instant: Instant::now(),
        was_transitioning: false,
    }));

    // Detach input when the page goes away
    let ctx_hide = frame_ctx.clone();
    let pagehide = Closure::wrap(Box::new(move || {
        ctx_hide.borrow_mut().shutdown();
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("pagehide", pagehide.as_ref().unchecked_ref());
    pagehide.forget();

    artwork::hang_collection(&GALLERY, &frame_ctx);
    frame::start_loop(frame_ctx);
    Ok(())
}
