use crate::core::constants::{ART_TEXTURE_HEIGHT, ART_TEXTURE_WIDTH};
use crate::core::Wall;
use web_sys as web;

/// Artwork images, one array layer per wall.
///
/// A layer is only sampled once its image has been copied in; until then the
/// room shader paints that canvas with the piece's accent wash.
pub(crate) struct ArtworkTextures {
    texture: wgpu::Texture,
    pub(crate) view: wgpu::TextureView,
    pub(crate) sampler: wgpu::Sampler,
    ready: [bool; 4],
}

impl ArtworkTextures {
    pub(crate) fn new(device: &wgpu::Device) -> Self {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("artwork"),
            size: wgpu::Extent3d {
                width: ART_TEXTURE_WIDTH,
                height: ART_TEXTURE_HEIGHT,
                depth_or_array_layers: Wall::ALL.len() as u32,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            // external image copies need RENDER_ATTACHMENT on the destination
            usage: wgpu::TextureUsages::TEXTURE_BINDING
                | wgpu::TextureUsages::COPY_DST
                | wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor {
            label: Some("artwork_view"),
            dimension: Some(wgpu::TextureViewDimension::D2Array),
            ..Default::default()
        });
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("artwork_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });
        Self {
            texture,
            view,
            sampler,
            ready: [false; 4],
        }
    }

    /// Copy a decoded image into the layer for `wall`.
    pub(crate) fn hang(&mut self, queue: &wgpu::Queue, wall: Wall, bitmap: &web::ImageBitmap) {
        let layer = wall.index();
        queue.copy_external_image_to_texture(
            &wgpu::CopyExternalImageSourceInfo {
                source: wgpu::ExternalImageSource::ImageBitmap(bitmap.clone()),
                origin: wgpu::Origin2d::ZERO,
                flip_y: false,
            },
            wgpu::CopyExternalImageDestInfo {
                texture: &self.texture,
                mip_level: 0,
                origin: wgpu::Origin3d {
                    x: 0,
                    y: 0,
                    z: layer as u32,
                },
                aspect: wgpu::TextureAspect::All,
                color_space: wgpu::PredefinedColorSpace::Srgb,
                premultiplied_alpha: false,
            },
            wgpu::Extent3d {
                width: bitmap.width().min(ART_TEXTURE_WIDTH),
                height: bitmap.height().min(ART_TEXTURE_HEIGHT),
                depth_or_array_layers: 1,
            },
        );
        self.ready[layer] = true;
        log::info!("[art] hung {} wall", wall.name());
    }

    pub(crate) fn ready(&self) -> [bool; 4] {
        self.ready
    }
}
