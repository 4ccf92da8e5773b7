use super::helpers;
use super::targets::RenderTargets;
use wgpu;

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct PostUniforms {
    pub(crate) resolution: [f32; 2],
    pub(crate) time: f32,
    pub(crate) bloom_strength: f32,
    pub(crate) blur_dir: [f32; 2],
    pub(crate) threshold: f32,
    pub(crate) vignette_offset: f32,
    pub(crate) vignette_darkness: f32,
    pub(crate) _pad: [f32; 3],
}

/// Which pass a post uniform buffer feeds. Each pass owns its buffer since
/// every queue write lands before the encoder runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PostPass {
    Bright,
    BlurH,
    BlurV,
}

impl PostPass {
    pub(crate) fn blur_dir(self) -> [f32; 2] {
        match self {
            PostPass::Bright => [0.0, 0.0],
            PostPass::BlurH => [1.0, 0.0],
            PostPass::BlurV => [0.0, 1.0],
        }
    }
}

pub(crate) struct PostResources {
    pub(crate) bgl0: wgpu::BindGroupLayout, // tex+sampler+uniform
    pub(crate) bgl1: wgpu::BindGroupLayout, // tex+sampler
    pub(crate) uniforms: [wgpu::Buffer; 3],
    pub(crate) bright_pipeline: wgpu::RenderPipeline,
    pub(crate) blur_pipeline: wgpu::RenderPipeline,
    pub(crate) composite_pipeline: wgpu::RenderPipeline,
}

pub(crate) struct PostBindGroups {
    pub(crate) hdr: wgpu::BindGroup,
    pub(crate) from_bloom_a: wgpu::BindGroup,
    pub(crate) from_bloom_b: wgpu::BindGroup,
    pub(crate) bloom_a_only: wgpu::BindGroup,
}

fn texture_entry(binding: u32) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::FRAGMENT,
        ty: wgpu::BindingType::Texture {
            multisampled: false,
            view_dimension: wgpu::TextureViewDimension::D2,
            sample_type: wgpu::TextureSampleType::Float { filterable: true },
        },
        count: None,
    }
}

fn sampler_entry(binding: u32) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::FRAGMENT,
        ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
        count: None,
    }
}

pub(crate) fn create_post_resources(
    device: &wgpu::Device,
    bloom_format: wgpu::TextureFormat,
    swap_format: wgpu::TextureFormat,
) -> PostResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("post_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::POST_WGSL.into()),
    });
    let bgl0 = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("post_bgl0"),
        entries: &[
            texture_entry(0),
            sampler_entry(1),
            helpers::uniform_layout_entry(2, wgpu::ShaderStages::FRAGMENT),
        ],
    });
    let bgl1 = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("post_bgl1"),
        entries: &[texture_entry(0), sampler_entry(1)],
    });
    let uniforms = [
        helpers::create_uniform_buffer::<PostUniforms>(device, "post_uniforms_bright"),
        helpers::create_uniform_buffer::<PostUniforms>(device, "post_uniforms_blur_h"),
        helpers::create_uniform_buffer::<PostUniforms>(device, "post_uniforms_blur_v"),
    ];
    let pl_single = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("pl_post_0"),
        bind_group_layouts: &[&bgl0],
        push_constant_ranges: &[],
    });
    let pl_composite = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("pl_post_comp"),
        bind_group_layouts: &[&bgl0, &bgl1],
        push_constant_ranges: &[],
    });
    let bright_pipeline =
        helpers::make_fullscreen_pipeline(device, "bright", &pl_single, &shader, "fs_bright", bloom_format, None);
    let blur_pipeline =
        helpers::make_fullscreen_pipeline(device, "blur", &pl_single, &shader, "fs_blur", bloom_format, None);
    let composite_pipeline = helpers::make_fullscreen_pipeline(
        device,
        "composite",
        &pl_composite,
        &shader,
        "fs_composite",
        swap_format,
        Some(wgpu::BlendState::REPLACE),
    );

    PostResources {
        bgl0,
        bgl1,
        uniforms,
        bright_pipeline,
        blur_pipeline,
        composite_pipeline,
    }
}

impl PostResources {
    fn uniform(&self, pass: PostPass) -> &wgpu::Buffer {
        match pass {
            PostPass::Bright => &self.uniforms[0],
            PostPass::BlurH => &self.uniforms[1],
            PostPass::BlurV => &self.uniforms[2],
        }
    }

    pub(crate) fn write(&self, queue: &wgpu::Queue, pass: PostPass, mut u: PostUniforms) {
        u.blur_dir = pass.blur_dir();
        queue.write_buffer(self.uniform(pass), 0, bytemuck::bytes_of(&u));
    }

    fn source_group(
        &self,
        device: &wgpu::Device,
        label: &str,
        view: &wgpu::TextureView,
        sampler: &wgpu::Sampler,
        pass: PostPass,
    ) -> wgpu::BindGroup {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout: &self.bgl0,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: self.uniform(pass).as_entire_binding(),
                },
            ],
        })
    }

    /// Bind groups reference target views, so rebuild after every resize.
    pub(crate) fn bind_groups(
        &self,
        device: &wgpu::Device,
        sampler: &wgpu::Sampler,
        targets: &RenderTargets,
    ) -> PostBindGroups {
        let [bloom_a, bloom_b] = &targets.bloom;
        let bloom_a_only = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("bg_bloom_a_only"),
            layout: &self.bgl1,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&bloom_a.view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
            ],
        });
        PostBindGroups {
            hdr: self.source_group(device, "bg_hdr", &targets.hdr.view, sampler, PostPass::Bright),
            from_bloom_a: self.source_group(device, "bg_from_bloom_a", &bloom_a.view, sampler, PostPass::BlurH),
            from_bloom_b: self.source_group(device, "bg_from_bloom_b", &bloom_b.view, sampler, PostPass::BlurV),
            bloom_a_only,
        }
    }
}

pub(crate) fn blit(
    encoder: &mut wgpu::CommandEncoder,
    label: &str,
    target: &wgpu::TextureView,
    clear: wgpu::Color,
    pipeline: &wgpu::RenderPipeline,
    bg0: &wgpu::BindGroup,
    bg1: Option<&wgpu::BindGroup>,
) {
    let mut r = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
        label: Some(label),
        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
            view: target,
            resolve_target: None,
            ops: wgpu::Operations {
                load: wgpu::LoadOp::Clear(clear),
                store: wgpu::StoreOp::Store,
            },
        })],
        depth_stencil_attachment: None,
        timestamp_writes: None,
        occlusion_query_set: None,
    });
    r.set_pipeline(pipeline);
    r.set_bind_group(0, bg0, &[]);
    if let Some(g1) = bg1 {
        r.set_bind_group(1, g1, &[]);
    }
    r.draw(0..3, 0..1);
}
