use super::helpers;

/// Multisampled colour target resolved into the swapchain each frame.
pub(crate) struct RenderTargets {
    format: wgpu::TextureFormat,
    sample_count: u32,
    _msaa_tex: wgpu::Texture,
    pub(crate) msaa_view: wgpu::TextureView,
}

impl RenderTargets {
    pub(crate) fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        sample_count: u32,
        width: u32,
        height: u32,
    ) -> Self {
        let (tex, view) =
            helpers::create_color_texture(device, "msaa_color", width, height, format, sample_count);
        Self {
            format,
            sample_count,
            _msaa_tex: tex,
            msaa_view: view,
        }
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        *self = Self::new(device, self.format, self.sample_count, width, height);
    }
}
