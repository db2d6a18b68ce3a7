//! Shared GPU types and utilities used by the graph renderers.

use bytemuck::{Pod, Zeroable};

use crate::coords::{Viewport, ViewMatrix};
use crate::paint::Color;

use super::RenderCtx;

// ── blend ─────────────────────────────────────────────────────────────────

pub(super) fn premul_alpha_blend() -> wgpu::BlendState {
    let component = wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::One,
        dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
        operation: wgpu::BlendOperation::Add,
    };
    wgpu::BlendState { color: component, alpha: component }
}

// ── graph uniform ─────────────────────────────────────────────────────────

/// Uniform block shared by `lines.wgsl` and `markers.wgsl`.
///
/// The 3×2 view matrix is split into two vec4s to avoid WGSL's mat3x2
/// padding rules: `basis = (c0.x, c0.y, c1.x, c1.y)`,
/// `offset_viewport = (c2.x, c2.y, viewport.w, viewport.h)`.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct GraphUniform {
    pub basis: [f32; 4],
    pub offset_viewport: [f32; 4],
    pub color: [f32; 4],
    pub highlight: [f32; 4],
    /// x = marker half-size in logical px; yzw unused.
    pub marker: [f32; 4],
}

impl GraphUniform {
    pub(super) fn new(view: &ViewMatrix, viewport: Viewport, color: Color, highlight: Color, marker_half_px: f32) -> Self {
        let [c0, c1, c2] = view.cols;
        Self {
            basis: [c0.x, c0.y, c1.x, c1.y],
            offset_viewport: [c2.x, c2.y, viewport.width.max(1.0), viewport.height.max(1.0)],
            color: color.to_array(),
            highlight: highlight.to_array(),
            marker: [marker_half_px, 0.0, 0.0, 0.0],
        }
    }
}

/// Returns the `wgpu` minimum binding size for the graph uniform buffer.
pub(super) fn graph_uniform_min_binding_size() -> Option<std::num::NonZeroU64> {
    std::num::NonZeroU64::new(std::mem::size_of::<GraphUniform>() as u64)
}

/// Uniform buffer + bind group + layout for a single `GraphUniform`.
pub(super) struct UniformBinding {
    pub layout: wgpu::BindGroupLayout,
    pub buffer: wgpu::Buffer,
    pub bind_group: wgpu::BindGroup,
}

impl UniformBinding {
    pub(super) fn new(device: &wgpu::Device, label: &str) -> Self {
        let layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some(label),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: graph_uniform_min_binding_size(),
                },
                count: None,
            }],
        });

        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: std::mem::size_of::<GraphUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout: &layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
        });

        Self { layout, buffer, bind_group }
    }

    pub(super) fn write(&self, ctx: &RenderCtx<'_>, uniform: &GraphUniform) {
        ctx.queue.write_buffer(&self.buffer, 0, bytemuck::bytes_of(uniform));
    }
}

// ── growable GPU arrays ───────────────────────────────────────────────────

/// A GPU buffer holding up to `capacity` elements of `T`.
///
/// Created at the requested capacity on first use and reallocated (next power
/// of two) only if a frame ever needs more.
pub(super) struct GpuArray<T: Pod> {
    label: &'static str,
    usage: wgpu::BufferUsages,
    buffer: Option<wgpu::Buffer>,
    capacity: usize,
    _marker: std::marker::PhantomData<T>,
}

impl<T: Pod> GpuArray<T> {
    pub(super) fn new(label: &'static str, usage: wgpu::BufferUsages, capacity: usize) -> Self {
        Self {
            label,
            usage: usage | wgpu::BufferUsages::COPY_DST,
            buffer: None,
            capacity: capacity.max(1),
            _marker: std::marker::PhantomData,
        }
    }

    /// Makes sure the buffer exists and can hold `len` elements.
    ///
    /// Returns `true` when the buffer was (re)created, i.e. its contents are undefined.
    pub(super) fn ensure(&mut self, ctx: &RenderCtx<'_>, len: usize) -> bool {
        if self.buffer.is_some() && len <= self.capacity {
            return false;
        }
        if len > self.capacity {
            self.capacity = len.next_power_of_two();
            log::debug!("{}: growing to {} elements", self.label, self.capacity);
        }

        self.buffer = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(self.label),
            size: (self.capacity * std::mem::size_of::<T>()) as u64,
            usage: self.usage,
            mapped_at_creation: false,
        }));
        true
    }

    /// Uploads `data` at offset 0. Call [`ensure`](Self::ensure) first.
    pub(super) fn write(&self, ctx: &RenderCtx<'_>, data: &[T]) {
        if data.is_empty() {
            return;
        }
        if let Some(buffer) = self.buffer.as_ref() {
            ctx.queue.write_buffer(buffer, 0, bytemuck::cast_slice(data));
        }
    }

    pub(super) fn buffer(&self) -> Option<&wgpu::Buffer> {
        self.buffer.as_ref()
    }
}

// ── pipeline ──────────────────────────────────────────────────────────────

pub(super) struct PipelineDesc<'a> {
    pub label: &'a str,
    pub shader_src: &'a str,
    pub bind_group_layout: &'a wgpu::BindGroupLayout,
    pub buffers: &'a [wgpu::VertexBufferLayout<'a>],
    pub topology: wgpu::PrimitiveTopology,
}

pub(super) fn create_pipeline(ctx: &RenderCtx<'_>, desc: PipelineDesc<'_>) -> wgpu::RenderPipeline {
    let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(desc.label),
        source: wgpu::ShaderSource::Wgsl(desc.shader_src.into()),
    });

    let layout = ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some(desc.label),
        bind_group_layouts: &[desc.bind_group_layout],
        immediate_size: 0,
    });

    ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(desc.label),
        layout: Some(&layout),

        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            compilation_options: Default::default(),
            buffers: desc.buffers,
        },

        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            compilation_options: Default::default(),
            targets: &[Some(wgpu::ColorTargetState {
                format: ctx.surface_format,
                blend: Some(premul_alpha_blend()),
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),

        primitive: wgpu::PrimitiveState {
            topology: desc.topology,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: None,
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },

        depth_stencil: None,
        multisample: wgpu::MultisampleState {
            count: ctx.sample_count,
            mask: !0,
            alpha_to_coverage_enabled: false,
        },
        multiview_mask: None,
        cache: None,
    })
}

/// Key deciding whether a cached pipeline still matches the target.
pub(super) type PipelineKey = (wgpu::TextureFormat, u32);

pub(super) fn pipeline_key(ctx: &RenderCtx<'_>) -> PipelineKey {
    (ctx.surface_format, ctx.sample_count)
}
