// Shared simulation tuning constants for the gallery core.

// Room shell (world units, floor at y = 0, centered on x/z)
pub const ROOM_WIDTH: f32 = 12.0;
pub const ROOM_HEIGHT: f32 = 5.0;
pub const ROOM_DEPTH: f32 = 12.0;

// Eye and painting centers share the same height
pub const EYE_HEIGHT: f32 = ROOM_HEIGHT / 2.0 + 0.2;
pub const PAINTING_Y: f32 = ROOM_HEIGHT / 2.0 + 0.2;

// Frame geometry
pub const FRAME_WIDTH: f32 = 4.0;
pub const FRAME_HEIGHT: f32 = 2.8;
pub const FRAME_DEPTH: f32 = 0.08;
pub const FRAME_BORDER: f32 = 0.12;
pub const FRAME_WALL_OFFSET: f32 = 0.05; // gap between wall plane and frame center

// Artwork texture layer, same aspect as the canvas area
pub const ART_TEXTURE_WIDTH: u32 = 800;
pub const ART_TEXTURE_HEIGHT: u32 = 560;

// Lighting fixtures
pub const TRACK_OFFSET: f32 = 1.2; // fixture distance from its wall
pub const FIXTURE_Y: f32 = ROOM_HEIGHT - 0.02 - 0.36;
pub const PAINTING_LIGHT_OFFSET: f32 = 0.8;
pub const PAINTING_LIGHT_INTENSITY: f32 = 8.0;
pub const CONE_RADIUS_TOP: f32 = 0.06;
pub const CONE_RADIUS_BOTTOM: f32 = 1.4;
pub const CONE_OPACITY: f32 = 0.1;

// Drag input (radians per pixel, sign-inverted: grab the world)
pub const DRAG_SCALE_X: f32 = 0.003;
pub const DRAG_SCALE_Y: f32 = 0.002;
pub const MAX_DRAG_OFFSET_X: f32 = 0.35;
pub const MAX_DRAG_OFFSET_Y: f32 = 0.15;
pub const RESISTANCE_EXPONENT: i32 = 3;
pub const RESISTANCE_RATIO_CAP: f32 = 0.99; // keeps a sliver of motion at the limit

// Drag spring (overdamped: damping^2 > 4 * stiffness * mass)
pub const SPRING_STIFFNESS: f32 = 80.0;
pub const SPRING_DAMPING: f32 = 24.0;
pub const SPRING_MASS: f32 = 1.0;
pub const SPRING_MAX_SUBSTEP_SEC: f32 = 1.0 / 60.0;
pub const SPRING_REST_POSITION_EPS: f32 = 1e-4;
pub const SPRING_REST_VELOCITY_EPS: f32 = 1e-3;

// Wall-to-wall base angle smoothing: fraction per step = 1 - DECAY_BASE^dt
pub const BASE_ANGLE_DECAY_BASE: f32 = 0.001;
pub const BASE_ANGLE_SNAP_EPS: f32 = 1e-4;

// Frame delta clamp (seconds); protects integrators after a paused tab
pub const MAX_FRAME_DT_SEC: f32 = 0.05;

// Look-at sphere radius around the eye
pub const LOOK_RADIUS: f32 = 5.0;

// Projection
pub const CAMERA_FOV_Y_DEG: f32 = 60.0;
pub const CAMERA_Z_NEAR: f32 = 0.1;
pub const CAMERA_Z_FAR: f32 = 100.0;

// Navigation debounce window
pub const WALL_COOLDOWN_MS: u64 = 600;

// Dust particles
pub const PARTICLE_COUNT: usize = 60;
pub const PARTICLE_JITTER: f32 = 0.00015;
pub const PARTICLE_VERTICAL_JITTER: f32 = 0.5; // multiplier on jitter for y
pub const PARTICLE_UPWARD_BIAS: f32 = 0.000005;
pub const PARTICLE_DRAG: f32 = 0.985;
pub const PARTICLE_SPAWN_FRACTION: f32 = 0.85;
pub const PARTICLE_WRAP_FRACTION: f32 = 0.42; // half extent, i.e. 84% of the room
pub const PARTICLE_CEILING_FRACTION: f32 = 0.9;
pub const PARTICLE_FLOOR_OFFSET: f32 = 0.3;
pub const PARTICLE_SEED_SPAN: f32 = 1000.0;
pub const PARTICLE_SCALE_MIN: f32 = 0.001;
pub const PARTICLE_SCALE_SPAN: f32 = 0.0015;
pub const PARTICLE_NOISE_RATES: [f64; 3] = [0.3, 0.2, 0.25]; // per-axis time frequency
pub const PARTICLE_NOISE_OFFSETS: [f64; 3] = [0.0, 100.0, 200.0];
pub const PARTICLE_NOISE_INDEX_SCALE: f64 = 0.1;
