use super::gallery::{ArtPiece, MediaKind, Wall};

/// Image urls to hang on each wall. Video and embed media stay in the
/// detail view; their frames keep the accent wash.
pub fn image_media(collection: &[ArtPiece]) -> Vec<(Wall, &'static str)> {
    collection
        .iter()
        .filter(|p| p.media.kind == MediaKind::Image && !p.media.url.is_empty())
        .map(|p| (p.wall, p.media.url))
        .collect()
}

/// Centered source rect `[x, y, w, h]` that fills `dst` without distortion,
/// cropping the longer side (CSS `object-fit: cover`).
///
/// `None` when either size is empty.
pub fn cover_crop(src: [u32; 2], dst: [u32; 2]) -> Option<[u32; 4]> {
    let [sw, sh] = src;
    let [dw, dh] = dst;
    if sw == 0 || sh == 0 || dw == 0 || dh == 0 {
        return None;
    }
    let (sw64, sh64, dw64, dh64) = (sw as u64, sh as u64, dw as u64, dh as u64);
    if sw64 * dh64 > dw64 * sh64 {
        let cw = ((sh64 * dw64 / dh64) as u32).clamp(1, sw);
        Some([(sw - cw) / 2, 0, cw, sh])
    } else {
        let ch = ((sw64 * dh64 / dw64) as u32).clamp(1, sh);
        Some([0, (sh - ch) / 2, sw, ch])
    }
}
