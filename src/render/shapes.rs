use super::helpers::{self, PipelineSpec};
use backdrop_core::{FloatingShape, WireVertex};
use wgpu::util::DeviceExt;

const VERTEX_ATTRS: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct ShapeUniforms {
    model: [[f32; 4]; 4],
    color: [f32; 4],
}

struct ShapeMesh {
    vertices: wgpu::Buffer,
    indices: wgpu::Buffer,
    index_count: u32,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

pub(crate) struct ShapesResources {
    pipeline: wgpu::RenderPipeline,
    meshes: Vec<ShapeMesh>,
}

impl ShapesResources {
    pub(crate) fn new(
        device: &wgpu::Device,
        shader: &wgpu::ShaderModule,
        frame_bgl: &wgpu::BindGroupLayout,
        color_format: wgpu::TextureFormat,
        sample_count: u32,
        shapes: &[FloatingShape],
    ) -> Self {
        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("shape_bgl"),
            entries: &[helpers::uniform_layout_entry(0)],
        });
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("shape_pl"),
            bind_group_layouts: &[frame_bgl, &bgl],
            push_constant_ranges: &[],
        });
        let pipeline = helpers::make_pipeline(
            device,
            PipelineSpec {
                label: "shape_pipeline",
                layout: &layout,
                shader,
                vs_entry: "vs_shape",
                fs_entry: "fs_shape",
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<WireVertex>() as u64,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &VERTEX_ATTRS,
                }],
                topology: wgpu::PrimitiveTopology::LineList,
                color_format,
                blend: wgpu::BlendState::PREMULTIPLIED_ALPHA_BLENDING,
                sample_count,
            },
        );

        let meshes = shapes
            .iter()
            .map(|shape| {
                let mesh = shape.kind.wire_mesh();
                let vertices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("shape_vertices"),
                    contents: bytemuck::cast_slice(&mesh.vertices),
                    usage: wgpu::BufferUsages::VERTEX,
                });
                let indices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("shape_indices"),
                    contents: bytemuck::cast_slice(&mesh.indices),
                    usage: wgpu::BufferUsages::INDEX,
                });
                let uniform_buffer = helpers::uniform_buffer::<ShapeUniforms>(device, "shape_uniforms");
                let bind_group = helpers::uniform_bind_group(device, "shape_bg", &bgl, &uniform_buffer);
                log::debug!(
                    "[gpu] {:?}: {} vertices, {} edges",
                    shape.kind,
                    mesh.vertices.len(),
                    mesh.edge_count()
                );
                ShapeMesh {
                    vertices,
                    indices,
                    index_count: mesh.indices.len() as u32,
                    uniform_buffer,
                    bind_group,
                }
            })
            .collect();

        Self { pipeline, meshes }
    }

    pub(crate) fn update(&self, queue: &wgpu::Queue, shapes: &[FloatingShape]) {
        for (mesh, shape) in self.meshes.iter().zip(shapes) {
            let u = ShapeUniforms {
                model: shape.model_matrix().to_cols_array_2d(),
                color: [shape.color[0], shape.color[1], shape.color[2], shape.opacity],
            };
            queue.write_buffer(&mesh.uniform_buffer, 0, bytemuck::bytes_of(&u));
        }
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        rpass.set_pipeline(&self.pipeline);
        for mesh in &self.meshes {
            rpass.set_bind_group(1, &mesh.bind_group, &[]);
            rpass.set_vertex_buffer(0, mesh.vertices.slice(..));
            rpass.set_index_buffer(mesh.indices.slice(..), wgpu::IndexFormat::Uint32);
            rpass.draw_indexed(0..mesh.index_count, 0, 0..1);
        }
    }
}
