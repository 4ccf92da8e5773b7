// Rendering and interaction tuning for the web frontend.
//
// Simulation constants (room size, spring, dust) live in `core::constants`;
// this file only holds values the browser layer and the GPU passes use.

// DOM ids
pub const CANVAS_ID: &str = "gallery-canvas";
pub const PREV_BUTTON_ID: &str = "wall-prev";
pub const NEXT_BUTTON_ID: &str = "wall-next";
pub const MODAL_CLOSE_ID: &str = "modal-close";
pub const MODAL_BACKDROP_ID: &str = "modal-backdrop";

// Canvas resolution: device pixel ratio is clamped to [1, this]
pub const MAX_DEVICE_PIXEL_RATIO: f64 = 1.5;

// A press that moves less than this (CSS px) is a click, not a drag
pub const CLICK_SLOP_PX: f32 = 4.0;

// Scene colors (linear-ish RGB)
pub const CLEAR_COLOR: [f64; 3] = [0.039, 0.039, 0.039]; // #0a0a0a
pub const AMBIENT_INTENSITY: f32 = 0.15;
pub const FILL_LIGHT: [f32; 4] = [0.0, 4.5, 0.0, 3.0]; // xyz + intensity
pub const FILL_LIGHT_RANGE: f32 = 14.0;

// Frame tints: idle vs hovered border
pub const FRAME_COLOR: [f32; 3] = [0.165, 0.165, 0.165];
pub const FRAME_HOVER_COLOR: [f32; 3] = [0.10, 0.10, 0.10];

// Dust sprites: world scale is tiny, so billboards are enlarged
pub const DUST_SPRITE_GAIN: f32 = 14.0;
pub const DUST_OPACITY: f32 = 0.5;
pub const DUST_COLOR: [f32; 3] = [1.0, 0.97, 0.88];

// Post-processing
pub const BLOOM_STRENGTH: f32 = 0.35;
pub const BLOOM_THRESHOLD: f32 = 0.9;
pub const VIGNETTE_OFFSET: f32 = 0.25;
pub const VIGNETTE_DARKNESS: f32 = 0.5;
