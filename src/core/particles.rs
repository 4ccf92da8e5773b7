use super::config::ParticleConfig;
use super::constants::{
    PARTICLE_NOISE_INDEX_SCALE, PARTICLE_NOISE_OFFSETS, PARTICLE_NOISE_RATES,
};
use super::room::Aabb;
use glam::Vec3;
use rand::prelude::*;

/// Hashed-sine pseudo noise in [0, 1). Repeatable for identical inputs.
#[inline]
pub fn noise(x: f64, y: f64) -> f64 {
    let s = (x * 127.1 + y * 311.7).sin() * 43758.5453;
    s - s.floor()
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec3,
    pub velocity: Vec3,
    pub seed: f32,
    pub scale: f32,
}

/// Wrap one coordinate to the opposite bound once it leaves [min, max].
#[inline]
fn wrap_axis(v: f32, min: f32, max: f32) -> f32 {
    if v > max {
        min
    } else if v < min {
        max
    } else {
        v
    }
}

/// Fixed pool of drifting dust motes. Particles never die; they wrap.
#[derive(Clone, Debug)]
pub struct ParticleField {
    config: ParticleConfig,
    bounds: Aabb,
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Spawn `config.count` particles inside the spawn fraction of `bounds`.
    pub fn new(config: ParticleConfig, bounds: Aabb, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let center = bounds.center();
        let spawn_half = bounds.half_extents() * config.spawn_fraction;
        let particles = (0..config.count)
            .map(|_| {
                let position = Vec3::new(
                    center.x + (rng.gen::<f32>() * 2.0 - 1.0) * spawn_half.x,
                    bounds.min.y + rng.gen::<f32>() * (bounds.max.y - bounds.min.y),
                    center.z + (rng.gen::<f32>() * 2.0 - 1.0) * spawn_half.z,
                );
                Particle {
                    position,
                    velocity: Vec3::ZERO,
                    seed: rng.gen::<f32>() * config.seed_span,
                    scale: config.scale_min + rng.gen::<f32>() * config.scale_span,
                }
            })
            .collect();
        Self {
            config,
            bounds,
            particles,
        }
    }

    /// Build a field from explicit particles (used for replays and tests).
    pub fn from_particles(config: ParticleConfig, bounds: Aabb, particles: Vec<Particle>) -> Self {
        Self {
            config,
            bounds,
            particles,
        }
    }

    /// One integration step at absolute time `elapsed_sec`.
    ///
    /// Steps are per frame, not per second: the impulses are tiny and drag
    /// bounds the speed regardless of frame rate.
    pub fn step(&mut self, elapsed_sec: f64) {
        let c = &self.config;
        let b = self.bounds;
        for (i, p) in self.particles.iter_mut().enumerate() {
            let seed = p.seed as f64;
            let iy = i as f64 * PARTICLE_NOISE_INDEX_SCALE;
            let sample = |axis: usize| {
                let x = elapsed_sec * PARTICLE_NOISE_RATES[axis] + seed + PARTICLE_NOISE_OFFSETS[axis];
                (noise(x, iy) - 0.5) as f32
            };
            let n = Vec3::new(sample(0), sample(1), sample(2));

            p.velocity += Vec3::new(
                n.x * c.jitter,
                n.y * c.jitter * c.vertical_jitter + c.upward_bias,
                n.z * c.jitter,
            );
            p.velocity *= c.drag;
            p.position += p.velocity;

            p.position = Vec3::new(
                wrap_axis(p.position.x, b.min.x, b.max.x),
                wrap_axis(p.position.y, b.min.y, b.max.y),
                wrap_axis(p.position.z, b.min.z, b.max.z),
            );
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn bounds(&self) -> Aabb {
        self.bounds
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Packed `xyz + scale` per particle, ready for an instance buffer.
    pub fn instances(&self) -> Vec<[f32; 4]> {
        self.particles
            .iter()
            .map(|p| [p.position.x, p.position.y, p.position.z, p.scale])
            .collect()
    }
}
