/// Represents a single acquired frame.
///
/// This object is short-lived and must be finalized promptly. Holding the surface
/// texture prevents acquisition of subsequent frames.
pub struct GpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    /// View of the swapchain texture. Resolve target when MSAA is on.
    pub view: wgpu::TextureView,
    /// Multisampled color view all passes draw into, if MSAA is on.
    pub msaa_view: Option<wgpu::TextureView>,
    pub encoder: wgpu::CommandEncoder,
}
