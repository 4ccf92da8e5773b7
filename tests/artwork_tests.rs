// Host-side tests for fitting artwork images into their frames.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod gallery {
    include!("../src/core/gallery.rs");
}
mod artwork {
    include!("../src/core/artwork.rs");
}

use artwork::*;
use constants::*;
use gallery::*;

const LAYER: [u32; 2] = [ART_TEXTURE_WIDTH, ART_TEXTURE_HEIGHT];

#[test]
fn every_wall_hangs_its_image() {
    let media = image_media(&COLLECTION);
    let walls: Vec<_> = media.iter().map(|(w, _)| *w).collect();
    assert_eq!(walls, Wall::ALL.to_vec());
    assert_eq!(media[3].1, "/art/arc-browser.svg");
}

#[test]
fn non_image_media_is_skipped() {
    let mut pieces = COLLECTION;
    pieces[1].media.kind = MediaKind::Video;
    pieces[2].media.url = "";
    let walls: Vec<_> = image_media(&pieces).into_iter().map(|(w, _)| w).collect();
    assert_eq!(walls, vec![Wall::North, Wall::West]);
    assert!(image_media(&[]).is_empty());
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn layer_matches_the_canvas_aspect() {
    let layer = ART_TEXTURE_WIDTH as f32 / ART_TEXTURE_HEIGHT as f32;
    assert!((layer - FRAME_WIDTH / FRAME_HEIGHT).abs() < 1e-3);
}

#[test]
fn wide_images_lose_their_sides() {
    assert_eq!(cover_crop([1600, 900], LAYER), Some([157, 0, 1285, 900]));
}

#[test]
fn tall_images_lose_top_and_bottom() {
    assert_eq!(cover_crop([800, 1000], LAYER), Some([0, 220, 800, 560]));
}

#[test]
fn matching_aspect_is_untouched() {
    assert_eq!(cover_crop([1000, 700], LAYER), Some([0, 0, 1000, 700]));
    assert_eq!(cover_crop(LAYER, LAYER), Some([0, 0, 800, 560]));
}

#[test]
fn empty_sizes_have_no_crop() {
    assert_eq!(cover_crop([0, 300], LAYER), None);
    assert_eq!(cover_crop([300, 0], LAYER), None);
    assert_eq!(cover_crop([300, 300], [0, 560]), None);
}

#[test]
fn crop_stays_inside_the_source() {
    for (w, h) in [(1, 1), (3, 1000), (1000, 3), (4096, 4095), (801, 559)] {
        let [x, y, cw, ch] = cover_crop([w, h], LAYER).expect("non-empty");
        assert!(cw >= 1 && ch >= 1);
        assert!(x + cw <= w && y + ch <= h, "{}x{} -> {:?}", w, h, [x, y, cw, ch]);
    }
}
