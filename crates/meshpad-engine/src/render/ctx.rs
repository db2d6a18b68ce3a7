use crate::coords::Viewport;

/// Renderer-facing context (device/queue + target formats + viewport).
///
/// This is intentionally small and stable.
pub struct RenderCtx<'a> {
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
    pub surface_format: wgpu::TextureFormat,
    pub sample_count: u32,
    pub viewport: Viewport, // logical px
}

impl<'a> RenderCtx<'a> {
    #[inline]
    pub fn new(
        device: &'a wgpu::Device,
        queue: &'a wgpu::Queue,
        surface_format: wgpu::TextureFormat,
        sample_count: u32,
        viewport: Viewport,
    ) -> Self {
        Self {
            device,
            queue,
            surface_format,
            sample_count,
            viewport,
        }
    }
}

/// Target for drawing (encoder + color views).
///
/// With MSAA on, `color_view` is the multisampled texture and `resolve_view`
/// the swapchain texture; every pass resolves, so pass order does not matter.
pub struct RenderTarget<'a> {
    pub encoder: &'a mut wgpu::CommandEncoder,
    pub color_view: &'a wgpu::TextureView,
    pub resolve_view: Option<&'a wgpu::TextureView>,
}

impl<'a> RenderTarget<'a> {
    #[inline]
    pub fn new(
        encoder: &'a mut wgpu::CommandEncoder,
        color_view: &'a wgpu::TextureView,
        resolve_view: Option<&'a wgpu::TextureView>,
    ) -> Self {
        Self { encoder, color_view, resolve_view }
    }

    /// Color attachment for a pass over this target.
    pub fn color_attachment(&self, load: wgpu::LoadOp<wgpu::Color>) -> wgpu::RenderPassColorAttachment<'a> {
        wgpu::RenderPassColorAttachment {
            view: self.color_view,
            resolve_target: self.resolve_view,
            ops: wgpu::Operations {
                load,
                store: wgpu::StoreOp::Store,
            },
            depth_slice: None,
        }
    }

    /// Begins a pass that loads existing contents.
    pub fn begin_pass(&mut self, label: &str) -> wgpu::RenderPass<'_> {
        let attachment = self.color_attachment(wgpu::LoadOp::Load);
        self.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some(label),
            color_attachments: &[Some(attachment)],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        })
    }
}
