// Host-side tests for the camera controller (drag accumulator, spring, base angle).
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod gallery {
    include!("../src/core/gallery.rs");
}
mod config {
    include!("../src/core/config.rs");
}
mod camera {
    include!("../src/core/camera.rs");
}

use camera::*;
use config::CameraConfig;
use gallery::Wall;
use std::f32::consts::{FRAC_PI_2, PI, TAU};

const FRAME: f32 = 1.0 / 60.0;

fn controller() -> CameraController {
    CameraController::new(CameraConfig::default(), Wall::North)
}

fn settle(cam: &mut CameraController) {
    for _ in 0..1000 {
        cam.tick(FRAME);
        if cam.has_arrived() {
            return;
        }
    }
    panic!("camera never arrived at {:?}", cam.wall());
}

#[test]
fn shortest_angle_delta_takes_the_short_way() {
    assert!((shortest_angle_delta(0.0, FRAC_PI_2) - FRAC_PI_2).abs() < 1e-6);
    // North -> West is a quarter turn backwards, not three quarters forward
    assert!((shortest_angle_delta(0.0, 3.0 * FRAC_PI_2) + FRAC_PI_2).abs() < 1e-6);
    // Unwound input is reduced before comparing
    assert!((shortest_angle_delta(TAU + PI, 3.0 * FRAC_PI_2) - FRAC_PI_2).abs() < 1e-5);
    assert!(shortest_angle_delta(-FRAC_PI_2, 3.0 * FRAC_PI_2).abs() < 1e-5);
}

#[test]
fn smoothing_fraction_is_frame_rate_independent() {
    let one = smoothing_fraction(0.001, 1.0 / 30.0);
    let half = smoothing_fraction(0.001, 1.0 / 60.0);
    // Two half steps leave the same remainder as one full step
    let two_halves = 1.0 - (1.0 - half) * (1.0 - half);
    assert!((one - two_halves).abs() < 1e-6);
    assert_eq!(smoothing_fraction(0.001, 0.0), 0.0);
}

#[test]
fn resisted_drag_is_free_at_center_and_stiff_at_the_limit() {
    assert!((resisted_drag(0.0, 0.1, 0.35, 3) - 0.1).abs() < 1e-7);
    // Halfway out: (1 - 0.5)^3 = 0.125 of the delta survives
    let half = resisted_drag(0.175, 0.1, 0.35, 3);
    assert!((half - (0.175 + 0.0125)).abs() < 1e-6);
    // Overshooting delta is clamped
    assert_eq!(resisted_drag(0.0, 5.0, 0.35, 3), 0.35);
    assert_eq!(resisted_drag(0.0, -5.0, 0.35, 3), -0.35);
    // At the limit the ratio cap still lets a sliver through, and the clamp holds
    assert_eq!(resisted_drag(0.35, 1.0, 0.35, 3), 0.35);
    assert!(resisted_drag(0.35, -1.0, 0.35, 3) < 0.35);
}

#[test]
fn drag_stays_bounded_under_adversarial_input() {
    let mut cam = controller();
    let c = cam.config().clone();
    cam.pointer_down(0.0, 0.0);
    let mut x = 0.0f32;
    let mut y = 0.0f32;
    for i in 0..5000 {
        // Big alternating jumps with a strong bias, interleaved with ticks
        let sign = if i % 7 == 0 { 1.0 } else { -1.0 };
        x += sign * 900.0 * ((i % 13) as f32 + 1.0);
        y -= sign * 400.0 * ((i % 5) as f32 + 1.0);
        cam.pointer_move(x, y);
        let raw = cam.raw_drag();
        assert!(raw.x.abs() <= c.max_offset_x, "raw x {} escaped", raw.x);
        assert!(raw.y.abs() <= c.max_offset_y, "raw y {} escaped", raw.y);
        if i % 3 == 0 {
            cam.tick(FRAME);
            let off = cam.drag_offset();
            assert!(off.x.abs() <= c.max_offset_x + 1e-5, "offset x {}", off.x);
            assert!(off.y.abs() <= c.max_offset_y + 1e-5, "offset y {}", off.y);
        }
    }
}

#[test]
fn drag_is_sign_inverted() {
    let mut cam = controller();
    cam.pointer_down(100.0, 100.0);
    // Pointer moves left and down: view turns right and up
    cam.pointer_move(90.0, 110.0);
    let raw = cam.raw_drag();
    assert!(raw.x > 0.0);
    assert!(raw.y < 0.0);
    assert!((raw.x - 10.0 * 0.003).abs() < 1e-6);
}

#[test]
fn move_without_press_is_ignored() {
    let mut cam = controller();
    cam.pointer_move(500.0, 500.0);
    assert_eq!(cam.raw_drag(), glam::Vec2::ZERO);
    assert!(!cam.is_dragging());
}

#[test]
fn spring_approaches_drag_target_without_overshoot() {
    let mut cam = controller();
    cam.pointer_down(0.0, 0.0);
    cam.pointer_move(-1000.0, 0.0);
    let target = cam.raw_drag().x;
    assert_eq!(target, 0.35);
    let mut prev = 0.0f32;
    for _ in 0..300 {
        cam.tick(FRAME);
        let x = cam.drag_offset().x;
        assert!(x >= prev - 1e-7, "spring moved backwards: {} -> {}", prev, x);
        assert!(x <= target + 1e-6, "spring overshot: {}", x);
        prev = x;
    }
    assert!((prev - target).abs() < 1e-3);
}

#[test]
fn released_spring_returns_monotonically_to_exact_zero() {
    let mut cam = controller();
    cam.pointer_down(0.0, 0.0);
    cam.pointer_move(-1000.0, -1000.0);
    for _ in 0..300 {
        cam.tick(FRAME);
    }
    cam.pointer_up();
    assert_eq!(cam.spring_target(), glam::Vec2::ZERO);

    let mut prev = cam.drag_offset();
    assert!(prev.x > 0.3);
    for _ in 0..600 {
        cam.tick(FRAME);
        let off = cam.drag_offset();
        assert!(off.x >= 0.0 && off.x <= prev.x + 1e-7, "x not monotone: {} -> {}", prev.x, off.x);
        assert!(off.y >= 0.0 && off.y <= prev.y + 1e-7, "y not monotone: {} -> {}", prev.y, off.y);
        prev = off;
    }
    assert_eq!(cam.drag_offset(), glam::Vec2::ZERO);
    assert_eq!(cam.drag_velocity(), glam::Vec2::ZERO);
    assert!(cam.is_settled());
}

#[test]
fn large_frame_gaps_do_not_destabilize_the_spring() {
    let mut cam = controller();
    cam.pointer_down(0.0, 0.0);
    cam.pointer_move(-1000.0, 0.0);
    for _ in 0..20 {
        cam.tick(0.5);
        let x = cam.drag_offset().x;
        assert!(x.is_finite());
        assert!((0.0..=0.35 + 1e-6).contains(&x));
    }
}

#[test]
fn oversized_dt_is_clamped() {
    let mut a = controller();
    let mut b = controller();
    a.set_wall(Wall::East);
    b.set_wall(Wall::East);
    a.tick(10.0);
    b.tick(0.05);
    assert_eq!(a.base_angle(), b.base_angle());
}

#[test]
fn invalid_dt_integrates_nothing() {
    let mut cam = controller();
    cam.set_wall(Wall::East);
    cam.tick(f32::NAN);
    cam.tick(-1.0);
    cam.tick(0.0);
    assert_eq!(cam.base_angle(), 0.0);
    assert!(!cam.has_arrived());
}

#[test]
fn full_wall_cycle_accumulates_one_turn() {
    let mut cam = controller();
    let expected = [FRAC_PI_2, PI, 3.0 * FRAC_PI_2, TAU];
    for (wall, want) in [Wall::East, Wall::South, Wall::West, Wall::North]
        .into_iter()
        .zip(expected)
    {
        cam.set_wall(wall);
        assert!(
            (cam.target_angle() - want).abs() < 1e-5,
            "{:?}: target {} want {}",
            wall,
            cam.target_angle(),
            want
        );
        settle(&mut cam);
        assert_eq!(cam.base_angle(), cam.target_angle());
    }
    // The angle is not unwound: back at north after a full turn
    assert!((cam.base_angle() - TAU).abs() < 1e-5);
    let n = cam.normalized_angle();
    assert!(n < 1e-4 || TAU - n < 1e-4);
}

#[test]
fn backwards_step_goes_negative() {
    let mut cam = controller();
    cam.set_wall(Wall::West);
    assert!((cam.target_angle() + FRAC_PI_2).abs() < 1e-6);
    settle(&mut cam);
    assert!((cam.normalized_angle() - 3.0 * FRAC_PI_2).abs() < 1e-4);
}

#[test]
fn base_angle_eases_toward_target() {
    let mut cam = controller();
    cam.set_wall(Wall::East);
    let mut prev = cam.base_angle();
    for _ in 0..30 {
        cam.tick(FRAME);
        let a = cam.base_angle();
        assert!(a > prev && a <= FRAC_PI_2);
        prev = a;
    }
}

#[test]
fn set_wall_clears_raw_drag() {
    let mut cam = controller();
    cam.pointer_down(0.0, 0.0);
    cam.pointer_move(-100.0, 50.0);
    assert_ne!(cam.raw_drag(), glam::Vec2::ZERO);
    cam.set_wall(Wall::South);
    assert_eq!(cam.raw_drag(), glam::Vec2::ZERO);
    assert_eq!(cam.wall(), Wall::South);
}

#[test]
fn pose_faces_the_active_wall() {
    let mut cam = controller();
    let f = cam.pose().forward();
    assert!((f - glam::Vec3::NEG_Z).length() < 1e-5);
    assert!((cam.pose().eye.y - constants::EYE_HEIGHT).abs() < 1e-6);

    cam.set_wall(Wall::East);
    settle(&mut cam);
    let f = cam.pose().forward();
    assert!((f - glam::Vec3::X).length() < 1e-4);
}

#[test]
fn screen_ray_through_center_matches_forward() {
    let cam = controller();
    let pose = cam.pose();
    let (origin, dir) = pose.screen_ray(400.0, 300.0, 800.0, 600.0);
    assert_eq!(origin, pose.eye);
    assert!((dir - pose.forward()).length() < 1e-4);

    // Left edge points left of forward
    let (_, left) = pose.screen_ray(0.0, 300.0, 800.0, 600.0);
    assert!(left.x < -0.1);
}
