// Host-side tests for the collection data and room geometry.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod gallery {
    include!("../src/core/gallery.rs");
}
mod room {
    include!("../src/core/room.rs");
}

use constants::*;
use gallery::*;
use glam::Vec3;
use room::*;

#[test]
fn wall_indices_cycle() {
    assert_eq!(Wall::from_index(-1), Wall::West);
    assert_eq!(Wall::from_index(4), Wall::North);
    assert_eq!(Wall::from_index(-6), Wall::South);
    for w in Wall::ALL {
        assert_eq!(w.next().prev(), w);
        assert_eq!(Wall::from_index(w.index() as i64), w);
    }
    assert_eq!(Wall::West.next(), Wall::North);
    assert_eq!(Wall::North.prev(), Wall::West);
}

#[test]
fn collection_hangs_one_piece_per_wall() {
    for w in Wall::ALL {
        let on_wall: Vec<_> = COLLECTION.iter().filter(|p| p.wall == w).collect();
        assert_eq!(on_wall.len(), 1, "{:?}", w);
    }
    let mut ids: Vec<_> = COLLECTION.iter().map(|p| p.id).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), COLLECTION.len());
}

#[test]
fn lookups_by_wall() {
    assert_eq!(
        piece_for_wall(&COLLECTION, Wall::East).map(|p| p.id),
        Some("linear-app")
    );
    assert_eq!(
        piece_for_wall(&COLLECTION, Wall::West).map(|p| p.id),
        Some("arc-browser")
    );
    assert!(piece_for_wall(&[], Wall::North).is_none());
}

#[test]
fn every_piece_has_an_accent() {
    for p in COLLECTION.iter() {
        let c = accent_color(p);
        assert!(c.iter().all(|v| (0.0..=1.0).contains(v)));
    }
}

#[test]
fn frames_hang_just_off_their_walls() {
    let north = frame_box(Wall::North);
    assert!((north.center().z - (-ROOM_DEPTH / 2.0 + FRAME_WALL_OFFSET)).abs() < 1e-5);
    assert!((north.center().y - PAINTING_Y).abs() < 1e-5);
    assert!((north.half_extents().x - (FRAME_WIDTH / 2.0 + FRAME_BORDER)).abs() < 1e-5);

    let east = frame_box(Wall::East);
    assert!((east.center().x - (ROOM_WIDTH / 2.0 - FRAME_WALL_OFFSET)).abs() < 1e-5);
    assert!((east.half_extents().z - (FRAME_WIDTH / 2.0 + FRAME_BORDER)).abs() < 1e-5);
    assert!((east.half_extents().x - FRAME_DEPTH / 2.0).abs() < 1e-5);
}

#[test]
fn anchors_face_into_the_room() {
    for w in Wall::ALL {
        let a = wall_anchor(w);
        assert!(a.normal.dot(-Vec3::new(a.position.x, 0.0, a.position.z)) > 0.0, "{:?}", w);
        assert!((a.normal + outward(w)).length() < 1e-6);
    }
}

#[test]
fn ray_aabb_entry_and_exit() {
    let b = Aabb {
        min: Vec3::splat(-1.0),
        max: Vec3::splat(1.0),
    };
    let t = ray_aabb(Vec3::new(0.0, 0.0, -5.0), Vec3::Z, &b).expect("hit");
    assert!((t - 4.0).abs() < 1e-6);
    // From inside, the exit distance is reported
    let t = ray_aabb(Vec3::ZERO, Vec3::X, &b).expect("inside");
    assert!((t - 1.0).abs() < 1e-6);
    assert!(ray_aabb(Vec3::new(0.0, 5.0, -5.0), Vec3::Z, &b).is_none());
    // Behind the origin is a miss
    assert!(ray_aabb(Vec3::new(0.0, 0.0, 5.0), Vec3::Z, &b).is_none());
}

#[test]
fn picking_from_the_eye_finds_each_frame() {
    let eye = Vec3::new(0.0, EYE_HEIGHT, 0.0);
    let cases = [
        (Vec3::NEG_Z, Wall::North),
        (Vec3::X, Wall::East),
        (Vec3::Z, Wall::South),
        (Vec3::NEG_X, Wall::West),
    ];
    for (dir, wall) in cases {
        let (hit, t) = pick_wall(eye, dir).expect("frame in view");
        assert_eq!(hit, wall);
        assert!(t > 5.0 && t < 6.0);
    }
    // Straight up sees only ceiling
    assert!(pick_wall(eye, Vec3::Y).is_none());
}

#[test]
fn cones_run_from_fixture_toward_the_wall() {
    for w in Wall::ALL {
        let c = light_cone(w);
        assert!((c.from.y - FIXTURE_Y).abs() < 1e-6);
        assert!(c.to.y < c.from.y);
        assert!((c.to - c.from).dot(outward(w)) > 0.0);
        assert!((c.height - (c.to - c.from).length()).abs() < 1e-5);
        // the cone's local +Y follows its axis
        let axis = c.orientation * Vec3::Y;
        assert!((axis - (c.to - c.from).normalize()).length() < 1e-4);
        assert!(c.radius_bottom > c.radius_top);
    }
}

#[test]
fn painting_lights_aim_at_the_artwork() {
    for (w, l) in Wall::ALL.into_iter().zip(painting_lights()) {
        assert!((l.aim.y - PAINTING_Y).abs() < 1e-6);
        assert!(l.position.y > l.aim.y);
        assert!((l.aim - l.position).dot(outward(w)) > 0.0);
        assert!(l.width > FRAME_WIDTH && l.height > FRAME_HEIGHT);
    }
}

#[test]
fn track_rails_sit_above_their_fixtures() {
    for ((w, t), c) in Wall::ALL.into_iter().zip(track_lights()).zip(light_cones()) {
        assert!(t.position.y > c.from.y && t.position.y < ROOM_HEIGHT);
        // rail and fixture head share the same offset from the wall
        assert!((Vec3::new(t.position.x, 0.0, t.position.z) - Vec3::new(c.from.x, 0.0, c.from.z)).length() < 1e-5);
        assert!((t.yaw - wall_anchor(w).yaw).abs() < 1e-6);
    }
}

#[test]
fn dust_bounds_sit_inside_the_room() {
    let b = particle_bounds();
    let room = Aabb {
        min: Vec3::new(-ROOM_WIDTH / 2.0, 0.0, -ROOM_DEPTH / 2.0),
        max: Vec3::new(ROOM_WIDTH / 2.0, ROOM_HEIGHT, ROOM_DEPTH / 2.0),
    };
    assert!(room.contains(b.min) && room.contains(b.max));
    assert!((b.min.y - PARTICLE_FLOOR_OFFSET).abs() < 1e-6);
    assert!((b.max.y - ROOM_HEIGHT * 0.9).abs() < 1e-5);
}
