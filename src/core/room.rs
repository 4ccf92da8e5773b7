use super::constants::*;
use super::gallery::Wall;
use glam::{Quat, Vec3};
use std::f32::consts::{FRAC_PI_2, PI};

/// Axis-aligned box in room space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn from_center(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn half_extents(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }

    pub fn contains(&self, p: Vec3) -> bool {
        p.cmpge(self.min).all() && p.cmple(self.max).all()
    }
}

/// Where an artwork hangs: frame center and the yaw that turns it to face the room.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WallAnchor {
    pub position: Vec3,
    pub yaw: f32,
    pub normal: Vec3,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PaintingLight {
    pub position: Vec3,
    pub aim: Vec3,
    pub width: f32,
    pub height: f32,
    pub intensity: f32,
    pub color: [f32; 3],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackLight {
    pub position: Vec3,
    pub yaw: f32,
}

/// Fading light shaft from a ceiling fixture to its painting.
///
/// `position` is the shaft midpoint and `orientation` rotates +Y onto the
/// fixture-to-painting direction, matching how a cylinder mesh is authored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightCone {
    pub from: Vec3,
    pub to: Vec3,
    pub position: Vec3,
    pub orientation: Quat,
    pub height: f32,
    pub radius_top: f32,
    pub radius_bottom: f32,
}

pub const WARM_LIGHT: [f32; 3] = [1.0, 0.96, 0.88];

/// Unit vector from the room center toward the wall.
pub fn outward(wall: Wall) -> Vec3 {
    match wall {
        Wall::North => Vec3::NEG_Z,
        Wall::South => Vec3::Z,
        Wall::East => Vec3::X,
        Wall::West => Vec3::NEG_X,
    }
}

fn wall_distance(wall: Wall) -> f32 {
    match wall {
        Wall::North | Wall::South => ROOM_DEPTH / 2.0,
        Wall::East | Wall::West => ROOM_WIDTH / 2.0,
    }
}

/// Point `inset` in front of the wall plane at height `y`, centered on the wall.
pub fn wall_point(wall: Wall, inset: f32, y: f32) -> Vec3 {
    outward(wall) * (wall_distance(wall) - inset) + Vec3::Y * y
}

pub fn wall_anchor(wall: Wall) -> WallAnchor {
    let yaw = match wall {
        Wall::North => 0.0,
        Wall::South => PI,
        Wall::East => -FRAC_PI_2,
        Wall::West => FRAC_PI_2,
    };
    WallAnchor {
        position: wall_point(wall, FRAME_WALL_OFFSET, PAINTING_Y),
        yaw,
        normal: -outward(wall),
    }
}

/// World-space bounds of a frame including its border.
pub fn frame_box(wall: Wall) -> Aabb {
    let along = FRAME_WIDTH / 2.0 + FRAME_BORDER;
    let up = FRAME_HEIGHT / 2.0 + FRAME_BORDER;
    let deep = FRAME_DEPTH / 2.0;
    let half = match wall {
        Wall::North | Wall::South => Vec3::new(along, up, deep),
        Wall::East | Wall::West => Vec3::new(deep, up, along),
    };
    Aabb::from_center(wall_anchor(wall).position, half)
}

pub fn painting_lights() -> [PaintingLight; 4] {
    Wall::ALL.map(|wall| PaintingLight {
        position: wall_point(wall, PAINTING_LIGHT_OFFSET, PAINTING_Y + 0.8),
        aim: wall_point(wall, 0.0, PAINTING_Y),
        width: FRAME_WIDTH + 0.5,
        height: FRAME_HEIGHT + 0.5,
        intensity: PAINTING_LIGHT_INTENSITY,
        color: WARM_LIGHT,
    })
}

pub fn track_lights() -> [TrackLight; 4] {
    Wall::ALL.map(|wall| TrackLight {
        position: wall_point(wall, TRACK_OFFSET, ROOM_HEIGHT - 0.02),
        yaw: wall_anchor(wall).yaw,
    })
}

pub fn light_cone(wall: Wall) -> LightCone {
    let from = wall_point(wall, TRACK_OFFSET, FIXTURE_Y);
    let to = wall_point(wall, 0.1, PAINTING_Y);
    let dir = to - from;
    LightCone {
        from,
        to,
        position: (from + to) * 0.5,
        orientation: Quat::from_rotation_arc(Vec3::Y, dir.normalize()),
        height: dir.length(),
        radius_top: CONE_RADIUS_TOP,
        radius_bottom: CONE_RADIUS_BOTTOM,
    }
}

pub fn light_cones() -> [LightCone; 4] {
    Wall::ALL.map(light_cone)
}

/// Wrap box for the dust field: 84% of width/depth, floor offset to 90% height.
pub fn particle_bounds() -> Aabb {
    let hw = ROOM_WIDTH * PARTICLE_WRAP_FRACTION;
    let hd = ROOM_DEPTH * PARTICLE_WRAP_FRACTION;
    Aabb {
        min: Vec3::new(-hw, PARTICLE_FLOOR_OFFSET, -hd),
        max: Vec3::new(hw, ROOM_HEIGHT * PARTICLE_CEILING_FRACTION, hd),
    }
}

/// Slab test; returns the entry distance, or the exit distance when the
/// origin is inside the box.
#[inline]
pub fn ray_aabb(origin: Vec3, dir: Vec3, aabb: &Aabb) -> Option<f32> {
    let inv = dir.recip();
    let t0 = (aabb.min - origin) * inv;
    let t1 = (aabb.max - origin) * inv;
    let t_near = t0.min(t1).max_element();
    let t_far = t0.max(t1).min_element();
    if t_far < t_near.max(0.0) {
        return None;
    }
    Some(if t_near >= 0.0 { t_near } else { t_far })
}

/// Nearest frame hit by the ray.
pub fn pick_wall(origin: Vec3, dir: Vec3) -> Option<(Wall, f32)> {
    let mut best = None::<(Wall, f32)>;
    for wall in Wall::ALL {
        if let Some(t) = ray_aabb(origin, dir, &frame_box(wall)) {
            match best {
                Some((_, bt)) if t >= bt => {}
                _ => best = Some((wall, t)),
            }
        }
    }
    best
}
