use super::helpers::{self, HDR_FORMAT};
use wgpu;

pub(crate) struct ColorTarget {
    // kept alive for the view
    _tex: wgpu::Texture,
    pub(crate) view: wgpu::TextureView,
}

impl ColorTarget {
    fn new(device: &wgpu::Device, label: &str, width: u32, height: u32) -> Self {
        let (tex, view) = helpers::create_color_texture(device, label, width, height, HDR_FORMAT);
        Self { _tex: tex, view }
    }
}

/// Offscreen color targets: the full-resolution HDR scene plus two
/// half-resolution bloom buffers used as a blur ping-pong pair.
pub(crate) struct RenderTargets {
    pub(crate) hdr: ColorTarget,
    pub(crate) bloom: [ColorTarget; 2],
    pub(crate) bloom_size: [u32; 2],
}

impl RenderTargets {
    pub(crate) fn new(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let bw = (width.max(1) / 2).max(1);
        let bh = (height.max(1) / 2).max(1);
        Self {
            hdr: ColorTarget::new(device, "hdr_tex", width, height),
            bloom: [
                ColorTarget::new(device, "bloom_a", bw, bh),
                ColorTarget::new(device, "bloom_b", bw, bh),
            ],
            bloom_size: [bw, bh],
        }
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        *self = Self::new(device, width, height);
    }
}
