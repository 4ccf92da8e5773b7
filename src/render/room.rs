use super::artwork::ArtworkTextures;
use super::helpers;
use crate::constants::{
    AMBIENT_INTENSITY, FILL_LIGHT, FILL_LIGHT_RANGE, FRAME_COLOR, FRAME_HOVER_COLOR,
};
use crate::core::constants::{CONE_OPACITY, FRAME_BORDER, ROOM_DEPTH, ROOM_HEIGHT, ROOM_WIDTH};
use crate::core::SceneFrame;
use wgpu;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct FramePacked {
    pub(crate) center: [f32; 4],
    pub(crate) half_hovered: [f32; 4],
    pub(crate) normal_selected: [f32; 4],
    // rgb accent, w = 1 once the artwork layer is loaded
    pub(crate) accent: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct ConePacked {
    pub(crate) apex_radius: [f32; 4],
    pub(crate) base_radius: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct LightPacked {
    pub(crate) position_intensity: [f32; 4],
    pub(crate) aim_width: [f32; 4],
    pub(crate) color_height: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct RoomUniforms {
    pub(crate) inv_view_proj: [[f32; 4]; 4],
    pub(crate) eye_time: [f32; 4],
    pub(crate) room_ambient: [f32; 4],
    pub(crate) fill: [f32; 4],
    // fill range, cone opacity, frame border, unused
    pub(crate) misc: [f32; 4],
    pub(crate) frame_color: [f32; 4],
    pub(crate) frame_hover: [f32; 4],
    pub(crate) frames: [FramePacked; 4],
    pub(crate) cones: [ConePacked; 4],
    pub(crate) lights: [LightPacked; 4],
    // rail position + yaw
    pub(crate) tracks: [[f32; 4]; 4],
}

fn flag(b: bool) -> f32 {
    if b {
        1.0
    } else {
        0.0
    }
}

pub(crate) fn pack_room_uniforms(scene: &SceneFrame, aspect: f32, art_ready: [bool; 4]) -> RoomUniforms {
    let inv = scene.pose.view_projection(aspect).inverse();
    let eye = scene.pose.eye;
    let frames = scene.frames.map(|f| {
        let has_art = art_ready[f.wall.index()];
        let c = f.bounds.center();
        let h = f.bounds.half_extents();
        FramePacked {
            center: [c.x, c.y, c.z, 0.0],
            half_hovered: [h.x, h.y, h.z, flag(f.hovered)],
            normal_selected: [f.normal.x, f.normal.y, f.normal.z, flag(f.selected)],
            accent: [f.accent[0], f.accent[1], f.accent[2], flag(has_art)],
        }
    });
    let cones = scene.cones.map(|c| ConePacked {
        apex_radius: [c.from.x, c.from.y, c.from.z, c.radius_top],
        base_radius: [c.to.x, c.to.y, c.to.z, c.radius_bottom],
    });
    let lights = scene.lights.map(|l| LightPacked {
        position_intensity: [l.position.x, l.position.y, l.position.z, l.intensity],
        aim_width: [l.aim.x, l.aim.y, l.aim.z, l.width],
        color_height: [l.color[0], l.color[1], l.color[2], l.height],
    });
    let tracks = scene
        .tracks
        .map(|t| [t.position.x, t.position.y, t.position.z, t.yaw]);
    RoomUniforms {
        inv_view_proj: inv.to_cols_array_2d(),
        eye_time: [eye.x, eye.y, eye.z, scene.time],
        room_ambient: [ROOM_WIDTH, ROOM_HEIGHT, ROOM_DEPTH, AMBIENT_INTENSITY],
        fill: FILL_LIGHT,
        misc: [FILL_LIGHT_RANGE, CONE_OPACITY, FRAME_BORDER, 0.0],
        frame_color: [FRAME_COLOR[0], FRAME_COLOR[1], FRAME_COLOR[2], 1.0],
        frame_hover: [FRAME_HOVER_COLOR[0], FRAME_HOVER_COLOR[1], FRAME_HOVER_COLOR[2], 1.0],
        frames,
        cones,
        lights,
        tracks,
    }
}

/// Ray-traced room shell, frames, fixtures and light shafts in one
/// fullscreen pass. Binding 1/2 are the artwork layers and their sampler.
pub(crate) struct RoomResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
}

pub(crate) fn create_room_resources(
    device: &wgpu::Device,
    hdr_format: wgpu::TextureFormat,
    art: &ArtworkTextures,
) -> RoomResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("room_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::ROOM_WGSL.into()),
    });
    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("room_bgl"),
        entries: &[
            helpers::uniform_layout_entry(0, wgpu::ShaderStages::FRAGMENT),
            wgpu::BindGroupLayoutEntry {
                binding: 1,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    sample_type: wgpu::TextureSampleType::Float { filterable: true },
                    view_dimension: wgpu::TextureViewDimension::D2Array,
                    multisampled: false,
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 2,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                count: None,
            },
        ],
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("room_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });
    let pipeline =
        helpers::make_fullscreen_pipeline(device, "room_pipeline", &pl, &shader, "fs_room", hdr_format, None);
    let uniform_buffer = helpers::create_uniform_buffer::<RoomUniforms>(device, "room_uniforms");
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("room_bg"),
        layout: &bgl,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::TextureView(&art.view),
            },
            wgpu::BindGroupEntry {
                binding: 2,
                resource: wgpu::BindingResource::Sampler(&art.sampler),
            },
        ],
    });
    RoomResources {
        pipeline,
        uniform_buffer,
        bind_group,
    }
}
