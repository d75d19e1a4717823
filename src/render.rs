use crate::constants::{CLEAR_COLOR, MAX_FRAME_LATENCY, MSAA_SAMPLES, POINT_SIZE_SCALE};
use backdrop_core::Scene;
use web_sys as web;

mod helpers;
mod points;
mod shapes;
mod targets;

use points::PointsResources;
use shapes::ShapesResources;
use targets::RenderTargets;

// Shaders bundled as string constants; both pipelines share the frame prelude.
static COMMON_WGSL: &str = include_str!("../shaders/common.wgsl");
static POINTS_WGSL: &str = include_str!("../shaders/points.wgsl");
static SHAPES_WGSL: &str = include_str!("../shaders/shapes.wgsl");

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct LightPacked {
    pos_range: [f32; 4],
    color_intensity: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct FrameUniforms {
    view_proj: [[f32; 4]; 4],
    view: [[f32; 4]; 4],
    eye: [f32; 4],
    fog_color: [f32; 3],
    fog_density: f32,
    ambient: [f32; 4],
    lights: [LightPacked; 3],
    viewport: [f32; 2],
    pad0: [f32; 2],
}

impl FrameUniforms {
    pub(crate) fn from_scene(scene: &Scene, width: u32, height: u32) -> Self {
        let cam = &scene.camera;
        let ambient = &scene.lights.ambient;
        let light = |i: usize| {
            let l = &scene.lights.points[i];
            LightPacked {
                pos_range: [l.position.x, l.position.y, l.position.z, l.range],
                color_intensity: [l.color[0], l.color[1], l.color[2], l.intensity],
            }
        };
        Self {
            view_proj: cam.view_projection().to_cols_array_2d(),
            view: cam.view_matrix().to_cols_array_2d(),
            eye: cam.eye.extend(1.0).to_array(),
            fog_color: scene.fog.color,
            fog_density: scene.fog.density,
            ambient: [
                ambient.color[0] * ambient.intensity,
                ambient.color[1] * ambient.intensity,
                ambient.color[2] * ambient.intensity,
                1.0,
            ],
            lights: [light(0), light(1), light(2)],
            viewport: [width as f32, height as f32],
            pad0: [0.0; 2],
        }
    }
}

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    targets: RenderTargets,
    frame_buffer: wgpu::Buffer,
    frame_bind_group: wgpu::BindGroup,
    points: PointsResources,
    shapes: ShapesResources,
    clear_color: wgpu::Color,
}

impl GpuState {
    pub async fn new(canvas: &web::HtmlCanvasElement, scene: &Scene) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
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
        let alpha_mode = if caps
            .alpha_modes
            .contains(&wgpu::CompositeAlphaMode::PreMultiplied)
        {
            wgpu::CompositeAlphaMode::PreMultiplied
        } else {
            caps.alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto)
        };
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: MAX_FRAME_LATENCY,
        };
        surface.configure(&device, &config);
        log::info!(
            "[gpu] surface {}x{} format={:?} alpha={:?}",
            width,
            height,
            format,
            alpha_mode
        );

        let targets = RenderTargets::new(&device, format, MSAA_SAMPLES, width, height);

        let frame_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("frame_bgl"),
            entries: &[helpers::uniform_layout_entry(0)],
        });
        let frame_buffer = helpers::uniform_buffer::<FrameUniforms>(&device, "frame_uniforms");
        let frame_bind_group =
            helpers::uniform_bind_group(&device, "frame_bg", &frame_bgl, &frame_buffer);

        let points_shader = shader_module(&device, "points_shader", POINTS_WGSL);
        let shapes_shader = shader_module(&device, "shapes_shader", SHAPES_WGSL);
        let points = PointsResources::new(
            &device,
            &points_shader,
            &frame_bgl,
            format,
            MSAA_SAMPLES,
            &scene.particles,
        );
        let shapes = ShapesResources::new(
            &device,
            &shapes_shader,
            &frame_bgl,
            format,
            MSAA_SAMPLES,
            &scene.shapes,
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            targets,
            frame_buffer,
            frame_bind_group,
            points,
            shapes,
            clear_color: wgpu::Color {
                r: CLEAR_COLOR[0],
                g: CLEAR_COLOR[1],
                b: CLEAR_COLOR[2],
                a: CLEAR_COLOR[3],
            },
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.config.width || height != self.config.height {
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.targets.recreate(&self.device, width, height);
        }
    }

    /// Reapply the current configuration after the surface was lost.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    pub fn render(&mut self, scene: &Scene) -> Result<(), wgpu::SurfaceError> {
        let frame = FrameUniforms::from_scene(scene, self.config.width, self.config.height);
        self.queue
            .write_buffer(&self.frame_buffer, 0, bytemuck::bytes_of(&frame));
        self.points
            .update(&self.queue, &scene.particles, POINT_SIZE_SCALE);
        self.shapes.update(&self.queue, &scene.shapes);

        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.targets.msaa_view,
                    resolve_target: Some(&view),
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Discard,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.frame_bind_group, &[]);
            self.shapes.draw(&mut rpass);
            self.points.draw(&mut rpass);
        }
        self.queue.submit(Some(encoder.finish()));
        output.present();
        Ok(())
    }
}

fn shader_module(device: &wgpu::Device, label: &str, body: &str) -> wgpu::ShaderModule {
    let source = format!("{COMMON_WGSL}\n{body}");
    device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(label),
        source: wgpu::ShaderSource::Wgsl(source.into()),
    })
}

