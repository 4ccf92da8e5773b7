use super::helpers;
use crate::constants::{DUST_COLOR, DUST_OPACITY, DUST_SPRITE_GAIN};
use crate::core::SceneFrame;
use wgpu;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct DustUniforms {
    pub(crate) view_proj: [[f32; 4]; 4],
    pub(crate) right: [f32; 4],
    pub(crate) up: [f32; 4],
    pub(crate) color_opacity: [f32; 4],
    pub(crate) params: [f32; 4],
}

pub(crate) fn pack_dust_uniforms(scene: &SceneFrame, aspect: f32) -> DustUniforms {
    let view = scene.pose.view_matrix();
    // camera basis in world space: rows of the view rotation
    let right = view.row(0);
    let up = view.row(1);
    DustUniforms {
        view_proj: scene.pose.view_projection(aspect).to_cols_array_2d(),
        right: [right.x, right.y, right.z, 0.0],
        up: [up.x, up.y, up.z, 0.0],
        color_opacity: [DUST_COLOR[0], DUST_COLOR[1], DUST_COLOR[2], DUST_OPACITY],
        params: [DUST_SPRITE_GAIN, 0.0, 0.0, 0.0],
    }
}

/// Instanced camera-facing quads, one per mote, blended additively.
pub(crate) struct DustResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) instance_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
    pub(crate) capacity: usize,
}

fn instance_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("dust_instances"),
        size: (capacity.max(1) * std::mem::size_of::<[f32; 4]>()) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

pub(crate) fn create_dust_resources(
    device: &wgpu::Device,
    hdr_format: wgpu::TextureFormat,
    capacity: usize,
) -> DustResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("dust_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::DUST_WGSL.into()),
    });
    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("dust_bgl"),
        entries: &[helpers::uniform_layout_entry(
            0,
            wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
        )],
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("dust_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });
    let attributes = wgpu::vertex_attr_array![0 => Float32x4];
    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("dust_pipeline"),
        layout: Some(&pl),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_dust"),
            buffers: &[wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<[f32; 4]>() as u64,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &attributes,
            }],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState::default(),
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_dust"),
            targets: &[Some(wgpu::ColorTargetState {
                format: hdr_format,
                blend: Some(helpers::additive_blend()),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    });
    let uniform_buffer = helpers::create_uniform_buffer::<DustUniforms>(device, "dust_uniforms");
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("dust_bg"),
        layout: &bgl,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: uniform_buffer.as_entire_binding(),
        }],
    });
    DustResources {
        pipeline,
        uniform_buffer,
        instance_buffer: instance_buffer(device, capacity),
        bind_group,
        capacity: capacity.max(1),
    }
}

impl DustResources {
    /// Uploads this frame's motes, growing the instance buffer if the field
    /// got bigger. Returns the number of instances to draw.
    pub(crate) fn upload(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, scene: &SceneFrame, aspect: f32) -> u32 {
        if scene.dust.len() > self.capacity {
            self.capacity = scene.dust.len();
            self.instance_buffer = instance_buffer(device, self.capacity);
        }
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&pack_dust_uniforms(scene, aspect)));
        if !scene.dust.is_empty() {
            queue.write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(&scene.dust));
        }
        scene.dust.len() as u32
    }
}
