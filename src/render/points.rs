use super::helpers::{self, PipelineSpec};
use backdrop_core::{PointCloud, PARTICLE_OPACITY};
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct PointInstance {
    position: [f32; 3],
    size: f32,
    color: [f32; 3],
}

const INSTANCE_ATTRS: [wgpu::VertexAttribute; 3] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32, 2 => Float32x3];

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct PointsUniforms {
    model: [[f32; 4]; 4],
    opacity: f32,
    size_scale: f32,
    pad0: [f32; 2],
}

pub(crate) struct PointsResources {
    pipeline: wgpu::RenderPipeline,
    instances: wgpu::Buffer,
    instance_count: u32,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

pub(crate) fn pack_instances(cloud: &PointCloud) -> Vec<PointInstance> {
    cloud
        .positions
        .iter()
        .zip(&cloud.colors)
        .zip(&cloud.sizes)
        .map(|((p, c), s)| PointInstance {
            position: p.to_array(),
            size: *s,
            color: *c,
        })
        .collect()
}

impl PointsResources {
    pub(crate) fn new(
        device: &wgpu::Device,
        shader: &wgpu::ShaderModule,
        frame_bgl: &wgpu::BindGroupLayout,
        color_format: wgpu::TextureFormat,
        sample_count: u32,
        cloud: &PointCloud,
    ) -> Self {
        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("points_bgl"),
            entries: &[helpers::uniform_layout_entry(0)],
        });
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("points_pl"),
            bind_group_layouts: &[frame_bgl, &bgl],
            push_constant_ranges: &[],
        });
        let pipeline = helpers::make_pipeline(
            device,
            PipelineSpec {
                label: "points_pipeline",
                layout: &layout,
                shader,
                vs_entry: "vs_points",
                fs_entry: "fs_points",
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<PointInstance>() as u64,
                    step_mode: wgpu::VertexStepMode::Instance,
                    attributes: &INSTANCE_ATTRS,
                }],
                topology: wgpu::PrimitiveTopology::TriangleList,
                color_format,
                blend: helpers::ADDITIVE_PREMULTIPLIED,
                sample_count,
            },
        );
        let packed = pack_instances(cloud);
        let instances = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("point_instances"),
            contents: bytemuck::cast_slice(&packed),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let uniform_buffer = helpers::uniform_buffer::<PointsUniforms>(device, "points_uniforms");
        let bind_group = helpers::uniform_bind_group(device, "points_bg", &bgl, &uniform_buffer);
        Self {
            pipeline,
            instances,
            instance_count: packed.len() as u32,
            uniform_buffer,
            bind_group,
        }
    }

    pub(crate) fn update(&self, queue: &wgpu::Queue, cloud: &PointCloud, size_scale: f32) {
        let u = PointsUniforms {
            model: cloud.model_matrix().to_cols_array_2d(),
            opacity: PARTICLE_OPACITY,
            size_scale,
            pad0: [0.0; 2],
        };
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&u));
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(1, &self.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.instances.slice(..));
        rpass.draw(0..6, 0..self.instance_count);
    }
}
