use glam::Vec2;
use web_sys as web;

/// Last pointer position in canvas backing-store pixels plus press tracking.
#[derive(Default, Clone, Copy)]
pub struct MouseState {
    pub x: f32,
    pub y: f32,
    pub down: bool,
    pub press_client: [f32; 2],
    pub travel: f32,
}

impl MouseState {
    pub fn press(&mut self, client_x: f32, client_y: f32) {
        self.down = true;
        self.press_client = [client_x, client_y];
        self.travel = 0.0;
    }

    /// Track the farthest distance from the press point while held.
    pub fn drag_to(&mut self, client_x: f32, client_y: f32) {
        if self.down {
            let d = Vec2::new(client_x, client_y) - Vec2::from(self.press_client);
            self.travel = self.travel.max(d.length());
        }
    }

    /// Release; returns true when the press never strayed past `slop_px`.
    pub fn release(&mut self, slop_px: f32) -> bool {
        let was_click = self.down && is_click(self.travel, slop_px);
        self.down = false;
        was_click
    }
}

#[inline]
pub fn is_click(travel_px: f32, slop_px: f32) -> bool {
    travel_px < slop_px
}

/// Backing-store size for a canvas of `css_w` x `css_h` CSS pixels.
///
/// The device pixel ratio is clamped to `[1, max_dpr]`; each side is at least 1.
pub fn backing_size(css_w: f64, css_h: f64, dpr: f64, max_dpr: f64) -> [u32; 2] {
    let dpr = if dpr.is_finite() { dpr.min(max_dpr).max(1.0) } else { 1.0 };
    [
        ((css_w * dpr) as u32).max(1),
        ((css_h * dpr) as u32).max(1),
    ]
}

#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let sx = (x_css / rect.width().max(1.0) as f32) * canvas.width() as f32;
    let sy = (y_css / rect.height().max(1.0) as f32) * canvas.height() as f32;
    Vec2::new(sx, sy)
}

#[inline]
pub fn pointer_client(ev: &web::PointerEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}
