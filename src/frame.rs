use crate::core::GallerySim;
use crate::events::{CameraInput, KeyboardInput};
use crate::render;
use crate::ui;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub sim: Rc<RefCell<GallerySim>>,
    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,
    pub gpu: Option<render::GpuState<'a>>,
    // Held so listeners live as long as the loop
    pub camera_input: CameraInput,
    pub keyboard_input: KeyboardInput,
    pub last_instant: Instant,
    pub was_transitioning: bool,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        let (scene, wall, transitioning) = {
            let mut sim = self.sim.borrow_mut();
            let scene = sim.tick(dt_sec);
            (scene, sim.nav.current_wall(), sim.nav.is_transitioning())
        };

        // Nav buttons are disabled while a wall change is locked
        if transitioning != self.was_transitioning {
            ui::update_wall_nav(&self.document, wall, transitioning);
            self.was_transitioning = transitioning;
        }

        if let Some(gpu) = &mut self.gpu {
            gpu.resize_if_needed(self.canvas.width(), self.canvas.height());
            match gpu.render(&scene) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => gpu.reconfigure(),
                Err(wgpu::SurfaceError::Timeout) => log::warn!("[gpu] frame timeout"),
                Err(e) => log::error!("[gpu] render error: {:?}", e),
            }
        }
    }

    pub fn shutdown(&mut self) {
        self.camera_input.unsubscribe();
        self.keyboard_input.unsubscribe();
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement, dust_capacity: usize) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, dust_capacity).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref().map(|c| c.as_ref().clone())) else {
        return;
    };
    _ = w.request_animation_frame(cb.unchecked_ref());
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}
