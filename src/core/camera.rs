use super::config::CameraConfig;
use super::constants::{CAMERA_FOV_Y_DEG, CAMERA_Z_FAR, CAMERA_Z_NEAR, RESISTANCE_RATIO_CAP};
use super::gallery::Wall;
use glam::{Mat4, Vec2, Vec3, Vec4};
use std::f32::consts::{PI, TAU};

/// Signed difference from `from` (any winding) to the absolute azimuth `to`,
/// wrapped to [-PI, PI] so the camera never turns the long way round.
#[inline]
pub fn shortest_angle_delta(from: f32, to: f32) -> f32 {
    let mut diff = to - from.rem_euclid(TAU);
    if diff > PI {
        diff -= TAU;
    }
    if diff < -PI {
        diff += TAU;
    }
    diff
}

/// Fraction of the remaining gap covered in `dt`; frame-rate independent.
#[inline]
pub fn smoothing_fraction(decay_base: f32, dt: f32) -> f32 {
    1.0 - decay_base.powf(dt)
}

/// Add `delta` to an accumulator that stiffens toward `max`, then hard clamp.
#[inline]
pub fn resisted_drag(current: f32, delta: f32, max: f32, exponent: i32) -> f32 {
    let ratio = (current.abs() / max).min(RESISTANCE_RATIO_CAP);
    let resistance = (1.0 - ratio).powi(exponent);
    (current + delta * resistance).clamp(-max, max)
}

/// One axis of a damped harmonic oscillator, integrated semi-implicitly.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Spring1D {
    pub position: f32,
    pub velocity: f32,
}

impl Spring1D {
    pub fn step(&mut self, target: f32, stiffness: f32, damping: f32, mass: f32, dt: f32) {
        let force = -stiffness * (self.position - target) - damping * self.velocity;
        self.velocity += force / mass * dt;
        self.position += self.velocity * dt;
    }

    /// Zero both terms once they fall under the thresholds; returns whether at rest.
    pub fn snap_to_rest(&mut self, position_eps: f32, velocity_eps: f32) -> bool {
        if self.position.abs() < position_eps && self.velocity.abs() < velocity_eps {
            self.position = 0.0;
            self.velocity = 0.0;
        }
        self.is_at_rest()
    }

    pub fn is_at_rest(&self) -> bool {
        self.position == 0.0 && self.velocity == 0.0
    }
}

/// Eye position and look-at target for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub eye: Vec3,
    pub target: Vec3,
}

impl CameraPose {
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(
            CAMERA_FOV_Y_DEG.to_radians(),
            aspect,
            CAMERA_Z_NEAR,
            CAMERA_Z_FAR,
        )
    }

    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        self.projection_matrix(aspect) * self.view_matrix()
    }

    pub fn forward(&self) -> Vec3 {
        (self.target - self.eye).normalize()
    }

    /// World-space ray through pixel (`sx`, `sy`) of a `width` x `height` target.
    pub fn screen_ray(&self, sx: f32, sy: f32, width: f32, height: f32) -> (Vec3, Vec3) {
        let ndc_x = (2.0 * sx / width.max(1.0)) - 1.0;
        let ndc_y = 1.0 - (2.0 * sy / height.max(1.0));
        let aspect = width.max(1.0) / height.max(1.0);
        let inv = self.view_projection(aspect).inverse();
        let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
        let p1: Vec3 = p_far.truncate() / p_far.w;
        (self.eye, (p1 - self.eye).normalize())
    }
}

/// Turns pointer drags and the active wall into a smoothed look direction.
///
/// Two layers feed the final azimuth:
/// - a base angle that eases toward the current wall's azimuth, always along
///   the shortest arc and without unwinding (it may grow past 2*PI);
/// - a per-axis spring chasing the raw drag accumulator while the pointer is
///   held, and zero once released.
///
/// All state advances in [`CameraController::tick`]; pointer handlers only
/// touch the raw accumulators and the dragging flag.
#[derive(Clone, Debug)]
pub struct CameraController {
    config: CameraConfig,
    wall: Wall,
    base_angle: f32,
    target_angle: f32,
    raw: Vec2,
    spring_x: Spring1D,
    spring_y: Spring1D,
    dragging: bool,
    last_pointer: Vec2,
}

impl CameraController {
    pub fn new(config: CameraConfig, wall: Wall) -> Self {
        let azimuth = wall.azimuth();
        Self {
            config,
            wall,
            base_angle: azimuth,
            target_angle: azimuth,
            raw: Vec2::ZERO,
            spring_x: Spring1D::default(),
            spring_y: Spring1D::default(),
            dragging: false,
            last_pointer: Vec2::ZERO,
        }
    }

    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    /// Retarget to `wall` along the shortest arc from the current smoothed angle.
    ///
    /// Raw drag is cleared so the new wall is reached centered, even mid-drag.
    pub fn set_wall(&mut self, wall: Wall) {
        let delta = shortest_angle_delta(self.base_angle, wall.azimuth());
        self.target_angle = self.base_angle + delta;
        self.wall = wall;
        self.raw = Vec2::ZERO;
    }

    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.dragging = true;
        self.last_pointer = Vec2::new(x, y);
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        if !self.dragging {
            return;
        }
        let pos = Vec2::new(x, y);
        let d = pos - self.last_pointer;
        self.last_pointer = pos;
        let c = &self.config;
        self.raw.x = resisted_drag(
            self.raw.x,
            -d.x * c.drag_scale_x,
            c.max_offset_x,
            c.resistance_exponent,
        );
        self.raw.y = resisted_drag(
            self.raw.y,
            -d.y * c.drag_scale_y,
            c.max_offset_y,
            c.resistance_exponent,
        );
    }

    /// End the drag; the springs now pull back to center.
    pub fn pointer_up(&mut self) {
        self.dragging = false;
        self.raw = Vec2::ZERO;
    }

    pub fn tick(&mut self, dt_sec: f32) -> CameraPose {
        // NaN and negative deltas integrate nothing
        let dt = if dt_sec > 0.0 {
            dt_sec.min(self.config.max_dt_sec)
        } else {
            0.0
        };

        let gap = self.target_angle - self.base_angle;
        if gap.abs() > self.config.base_snap_eps {
            self.base_angle += gap * smoothing_fraction(self.config.decay_base, dt);
        } else {
            self.base_angle = self.target_angle;
        }

        let target = self.spring_target();
        let c = &self.config;
        let substeps = ((dt / c.max_substep_sec) - 1e-4).ceil().max(1.0) as u32;
        let h = dt / substeps as f32;
        for _ in 0..substeps {
            self.spring_x.step(target.x, c.stiffness, c.damping, c.mass, h);
            self.spring_y.step(target.y, c.stiffness, c.damping, c.mass, h);
        }
        if !self.dragging {
            self.spring_x
                .snap_to_rest(c.rest_position_eps, c.rest_velocity_eps);
            self.spring_y
                .snap_to_rest(c.rest_position_eps, c.rest_velocity_eps);
        }

        self.pose()
    }

    pub fn pose(&self) -> CameraPose {
        let azimuth = self.base_angle + self.spring_x.position;
        let tilt = self.spring_y.position;
        let r = self.config.look_radius;
        let eye = Vec3::new(0.0, self.config.eye_height, 0.0);
        let target = Vec3::new(
            azimuth.sin() * r * tilt.cos(),
            self.config.eye_height + tilt.sin() * r,
            -azimuth.cos() * r * tilt.cos(),
        );
        CameraPose { eye, target }
    }

    pub fn spring_target(&self) -> Vec2 {
        if self.dragging {
            self.raw
        } else {
            Vec2::ZERO
        }
    }

    pub fn wall(&self) -> Wall {
        self.wall
    }

    /// Smoothed, unwound azimuth.
    pub fn base_angle(&self) -> f32 {
        self.base_angle
    }

    pub fn target_angle(&self) -> f32 {
        self.target_angle
    }

    pub fn normalized_angle(&self) -> f32 {
        self.base_angle.rem_euclid(TAU)
    }

    pub fn raw_drag(&self) -> Vec2 {
        self.raw
    }

    pub fn drag_offset(&self) -> Vec2 {
        Vec2::new(self.spring_x.position, self.spring_y.position)
    }

    pub fn drag_velocity(&self) -> Vec2 {
        Vec2::new(self.spring_x.velocity, self.spring_y.velocity)
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Base angle has reached its wall target.
    pub fn has_arrived(&self) -> bool {
        self.base_angle == self.target_angle
    }

    pub fn is_settled(&self) -> bool {
        self.has_arrived()
            && !self.dragging
            && self.spring_x.is_at_rest()
            && self.spring_y.is_at_rest()
    }
}
