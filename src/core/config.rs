use super::constants::*;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("spring is not overdamped: damping {damping}^2 <= 4 * {stiffness} * {mass}")]
    NotOverdamped {
        stiffness: f32,
        damping: f32,
        mass: f32,
    },
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },
    #[error("base angle decay base must be in (0, 1), got {0}")]
    DecayBaseOutOfRange(f32),
    #[error("particle drag must be in (0, 1], got {0}")]
    DragFactorOutOfRange(f32),
}

/// Camera feel: drag limits, spring coefficients and smoothing rates.
#[derive(Clone, Debug, PartialEq)]
pub struct CameraConfig {
    pub drag_scale_x: f32,
    pub drag_scale_y: f32,
    pub max_offset_x: f32,
    pub max_offset_y: f32,
    pub resistance_exponent: i32,
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
    pub max_substep_sec: f32,
    pub rest_position_eps: f32,
    pub rest_velocity_eps: f32,
    pub decay_base: f32,
    pub base_snap_eps: f32,
    pub max_dt_sec: f32,
    pub eye_height: f32,
    pub look_radius: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            drag_scale_x: DRAG_SCALE_X,
            drag_scale_y: DRAG_SCALE_Y,
            max_offset_x: MAX_DRAG_OFFSET_X,
            max_offset_y: MAX_DRAG_OFFSET_Y,
            resistance_exponent: RESISTANCE_EXPONENT,
            stiffness: SPRING_STIFFNESS,
            damping: SPRING_DAMPING,
            mass: SPRING_MASS,
            max_substep_sec: SPRING_MAX_SUBSTEP_SEC,
            rest_position_eps: SPRING_REST_POSITION_EPS,
            rest_velocity_eps: SPRING_REST_VELOCITY_EPS,
            decay_base: BASE_ANGLE_DECAY_BASE,
            base_snap_eps: BASE_ANGLE_SNAP_EPS,
            max_dt_sec: MAX_FRAME_DT_SEC,
            eye_height: EYE_HEIGHT,
            look_radius: LOOK_RADIUS,
        }
    }
}

/// When a wall transition stops blocking further navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnlockPolicy {
    /// Fixed debounce window, independent of camera motion.
    Cooldown,
    /// Unlock once the camera reports arrival, or when the window runs out.
    Arrival,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavigationConfig {
    pub cooldown: Duration,
    pub unlock: UnlockPolicy,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            cooldown: Duration::from_millis(WALL_COOLDOWN_MS),
            unlock: UnlockPolicy::Cooldown,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParticleConfig {
    pub count: usize,
    pub jitter: f32,
    pub vertical_jitter: f32,
    pub upward_bias: f32,
    pub drag: f32,
    pub spawn_fraction: f32,
    pub seed_span: f32,
    pub scale_min: f32,
    pub scale_span: f32,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: PARTICLE_COUNT,
            jitter: PARTICLE_JITTER,
            vertical_jitter: PARTICLE_VERTICAL_JITTER,
            upward_bias: PARTICLE_UPWARD_BIAS,
            drag: PARTICLE_DRAG,
            spawn_fraction: PARTICLE_SPAWN_FRACTION,
            seed_span: PARTICLE_SEED_SPAN,
            scale_min: PARTICLE_SCALE_MIN,
            scale_span: PARTICLE_SCALE_SPAN,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GalleryConfig {
    pub camera: CameraConfig,
    pub navigation: NavigationConfig,
    pub particles: ParticleConfig,
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

impl CameraConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("camera.max_offset_x", self.max_offset_x)?;
        positive("camera.max_offset_y", self.max_offset_y)?;
        positive("camera.stiffness", self.stiffness)?;
        positive("camera.mass", self.mass)?;
        positive("camera.max_substep_sec", self.max_substep_sec)?;
        positive("camera.max_dt_sec", self.max_dt_sec)?;
        positive("camera.look_radius", self.look_radius)?;
        if self.damping * self.damping <= 4.0 * self.stiffness * self.mass {
            return Err(ConfigError::NotOverdamped {
                stiffness: self.stiffness,
                damping: self.damping,
                mass: self.mass,
            });
        }
        if !(self.decay_base > 0.0 && self.decay_base < 1.0) {
            return Err(ConfigError::DecayBaseOutOfRange(self.decay_base));
        }
        Ok(())
    }
}

impl GalleryConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.camera.validate()?;
        positive(
            "navigation.cooldown",
            self.navigation.cooldown.as_secs_f32(),
        )?;
        let p = &self.particles;
        if !(p.drag > 0.0 && p.drag <= 1.0) {
            return Err(ConfigError::DragFactorOutOfRange(p.drag));
        }
        positive("particles.spawn_fraction", p.spawn_fraction)?;
        Ok(())
    }
}
