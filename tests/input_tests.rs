// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use input::*;

const SLOP: f32 = 4.0;

#[test]
fn click_threshold_is_exclusive() {
    assert!(is_click(0.0, SLOP));
    assert!(is_click(3.9, SLOP));
    assert!(!is_click(4.0, SLOP));
    assert!(!is_click(25.0, SLOP));
}

#[test]
fn press_and_release_in_place_is_a_click() {
    let mut m = MouseState::default();
    m.press(100.0, 100.0);
    assert!(m.down);
    m.drag_to(101.0, 102.0);
    assert!(m.release(SLOP));
    assert!(!m.down);
}

#[test]
fn travel_keeps_the_farthest_excursion() {
    let mut m = MouseState::default();
    m.press(0.0, 0.0);
    m.drag_to(30.0, 40.0);
    // Returning to the press point is still a drag
    m.drag_to(0.0, 0.0);
    assert_eq!(m.travel, 50.0);
    assert!(!m.release(SLOP));
}

#[test]
fn moves_while_up_do_not_count() {
    let mut m = MouseState::default();
    m.drag_to(500.0, 500.0);
    assert_eq!(m.travel, 0.0);
    // Release without a press is never a click
    assert!(!m.release(SLOP));
}

#[test]
fn new_press_resets_travel() {
    let mut m = MouseState::default();
    m.press(0.0, 0.0);
    m.drag_to(100.0, 0.0);
    m.release(SLOP);
    m.press(10.0, 10.0);
    assert_eq!(m.travel, 0.0);
    assert_eq!(m.press_client, [10.0, 10.0]);
}

#[test]
fn backing_store_caps_high_density_screens() {
    assert_eq!(backing_size(800.0, 600.0, 1.0, 1.5), [800, 600]);
    assert_eq!(backing_size(800.0, 600.0, 3.0, 1.5), [1200, 900]);
    // Low or bogus ratios fall back to one device pixel per CSS pixel
    assert_eq!(backing_size(800.0, 600.0, 0.5, 1.5), [800, 600]);
    assert_eq!(backing_size(800.0, 600.0, f64::NAN, 1.5), [800, 600]);
    assert_eq!(backing_size(0.0, 0.0, 2.0, 1.5), [1, 1]);
}
