use crate::constants::{
    BLOOM_STRENGTH, BLOOM_THRESHOLD, CLEAR_COLOR, VIGNETTE_DARKNESS, VIGNETTE_OFFSET,
};
use crate::core::{SceneFrame, Wall};
use web_sys as web;

mod artwork;
mod dust;
mod helpers;
mod post;
mod room;
mod targets;

use artwork::ArtworkTextures;
use dust::DustResources;
use post::{PostBindGroups, PostPass, PostResources, PostUniforms};
use room::RoomResources;
use targets::RenderTargets;

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    room: RoomResources,
    artwork: ArtworkTextures,
    dust: DustResources,
    targets: RenderTargets,
    linear_sampler: wgpu::Sampler,
    post: PostResources,
    post_groups: PostBindGroups,
    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement, dust_capacity: usize) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // default limits; some WebGPU builds reject unknown fields
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let targets = RenderTargets::new(&device, width, height);
        let artwork = ArtworkTextures::new(&device);
        let room = room::create_room_resources(&device, helpers::HDR_FORMAT, &artwork);
        let dust = dust::create_dust_resources(&device, helpers::HDR_FORMAT, dust_capacity);

        let linear_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("linear_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });
        let post = post::create_post_resources(&device, helpers::HDR_FORMAT, format);
        let post_groups = post.bind_groups(&device, &linear_sampler, &targets);
        log::info!("[gpu] surface {}x{} format={:?}", width, height, format);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            room,
            artwork,
            dust,
            targets,
            linear_sampler,
            post,
            post_groups,
            width,
            height,
            clear_color: wgpu::Color {
                r: CLEAR_COLOR[0],
                g: CLEAR_COLOR[1],
                b: CLEAR_COLOR[2],
                a: 1.0,
            },
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.targets.recreate(&self.device, width, height);
            self.post_groups = self.post.bind_groups(&self.device, &self.linear_sampler, &self.targets);
        }
    }

    /// Show a decoded image in the frame on `wall`.
    pub fn hang_artwork(&mut self, wall: Wall, bitmap: &web::ImageBitmap) {
        self.artwork.hang(&self.queue, wall, bitmap);
    }

    /// Surface lost or outdated: reconfigure and try again next frame.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    pub fn render(&mut self, scene: &SceneFrame) -> Result<(), wgpu::SurfaceError> {
        let aspect = self.width as f32 / self.height.max(1) as f32;
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });

        self.queue.write_buffer(
            &self.room.uniform_buffer,
            0,
            bytemuck::bytes_of(&room::pack_room_uniforms(scene, aspect, self.artwork.ready())),
        );
        let dust_count = self.dust.upload(&self.device, &self.queue, scene, aspect);

        // Pass 1: room then dust into HDR
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.targets.hdr.view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.room.pipeline);
            rpass.set_bind_group(0, &self.room.bind_group, &[]);
            rpass.draw(0..3, 0..1);

            if dust_count > 0 {
                rpass.set_pipeline(&self.dust.pipeline);
                rpass.set_bind_group(0, &self.dust.bind_group, &[]);
                rpass.set_vertex_buffer(0, self.dust.instance_buffer.slice(..));
                rpass.draw(0..6, 0..dust_count);
            }
        }

        let bloom = self.targets.bloom_size;
        let base = PostUniforms {
            resolution: [bloom[0] as f32, bloom[1] as f32],
            time: scene.time,
            bloom_strength: BLOOM_STRENGTH,
            blur_dir: [0.0, 0.0],
            threshold: BLOOM_THRESHOLD,
            vignette_offset: VIGNETTE_OFFSET,
            vignette_darkness: VIGNETTE_DARKNESS,
            _pad: [0.0; 3],
        };
        for pass in [PostPass::Bright, PostPass::BlurH, PostPass::BlurV] {
            self.post.write(&self.queue, pass, base);
        }

        let [bloom_a, bloom_b] = &self.targets.bloom;
        // Pass 2: bright pass -> bloom_a
        post::blit(
            &mut encoder,
            "bright_pass",
            &bloom_a.view,
            wgpu::Color::BLACK,
            &self.post.bright_pipeline,
            &self.post_groups.hdr,
            None,
        );
        // Pass 3: blur horizontal bloom_a -> bloom_b
        post::blit(
            &mut encoder,
            "blur_h",
            &bloom_b.view,
            wgpu::Color::BLACK,
            &self.post.blur_pipeline,
            &self.post_groups.from_bloom_a,
            None,
        );
        // Pass 4: blur vertical bloom_b -> bloom_a
        post::blit(
            &mut encoder,
            "blur_v",
            &bloom_a.view,
            wgpu::Color::BLACK,
            &self.post.blur_pipeline,
            &self.post_groups.from_bloom_b,
            None,
        );
        // Pass 5: composite + vignette to swapchain
        post::blit(
            &mut encoder,
            "composite",
            &view,
            self.clear_color,
            &self.post.composite_pipeline,
            &self.post_groups.hdr,
            Some(&self.post_groups.bloom_a_only),
        );

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
