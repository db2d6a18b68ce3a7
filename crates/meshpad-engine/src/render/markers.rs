use crate::coords::Vec2;
use crate::paint::Color;

use super::common::{
    create_pipeline, pipeline_key, GpuArray, GraphUniform, PipelineDesc, PipelineKey, UniformBinding,
};
use super::{GraphView, RenderCtx, RenderTarget};

/// Appearance of vertex markers.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MarkerStyle {
    pub color: Color,
    pub selected_color: Color,
    /// Half the marker edge length, in logical pixels.
    pub half_size_px: f32,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            color: Color::from_srgb_u8(40, 40, 48, 255),
            selected_color: Color::from_srgb_u8(230, 120, 20, 255),
            half_size_px: 3.5,
        }
    }
}

/// Draws a screen-space square at every vertex, selected ones highlighted.
///
/// One instance per vertex; the quad corners are generated in the vertex
/// shader from `vertex_index`, so no quad buffers are needed.
pub struct MarkerRenderer {
    style: MarkerStyle,

    pipeline_key: Option<PipelineKey>,
    pipeline: Option<wgpu::RenderPipeline>,
    uniform: Option<UniformBinding>,

    positions: GpuArray<Vec2>,
    flags: GpuArray<u32>,
    scratch_flags: Vec<u32>,
    uploaded_revision: Option<u64>,
}

impl MarkerRenderer {
    pub fn new(vertex_capacity: usize, style: MarkerStyle) -> Self {
        Self {
            style,
            pipeline_key: None,
            pipeline: None,
            uniform: None,
            positions: GpuArray::new("meshpad marker positions", wgpu::BufferUsages::VERTEX, vertex_capacity),
            flags: GpuArray::new("meshpad marker flags", wgpu::BufferUsages::VERTEX, vertex_capacity),
            scratch_flags: Vec::with_capacity(vertex_capacity),
            uploaded_revision: None,
        }
    }

    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, graph: &GraphView<'_>) {
        self.ensure_pipeline(ctx);
        self.upload(ctx, graph);

        if graph.positions.is_empty() {
            return;
        }

        let Some(uniform) = self.uniform.as_ref() else { return };
        uniform.write(
            ctx,
            &GraphUniform::new(
                &graph.view,
                ctx.viewport,
                self.style.color,
                self.style.selected_color,
                self.style.half_size_px,
            ),
        );

        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(positions) = self.positions.buffer() else { return };
        let Some(flags) = self.flags.buffer() else { return };

        let mut rpass = target.begin_pass("meshpad marker pass");
        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, &uniform.bind_group, &[]);
        rpass.set_vertex_buffer(0, positions.slice(..));
        rpass.set_vertex_buffer(1, flags.slice(..));
        rpass.draw(0..6, 0..graph.positions.len() as u32);
    }

    fn upload(&mut self, ctx: &RenderCtx<'_>, graph: &GraphView<'_>) {
        let len = graph.positions.len();
        let recreated = self.positions.ensure(ctx, len) | self.flags.ensure(ctx, len);

        if !recreated && self.uploaded_revision == Some(graph.revision) {
            return;
        }

        self.scratch_flags.clear();
        self.scratch_flags.resize(len, 0);
        for &v in graph.selected {
            if let Some(flag) = self.scratch_flags.get_mut(v as usize) {
                *flag = 1;
            }
        }

        self.positions.write(ctx, graph.positions);
        self.flags.write(ctx, &self.scratch_flags);
        self.uploaded_revision = Some(graph.revision);
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        let key = pipeline_key(ctx);
        if self.pipeline_key == Some(key) && self.pipeline.is_some() {
            return;
        }

        let uniform = UniformBinding::new(ctx.device, "meshpad marker uniform");

        let position_attrs = wgpu::vertex_attr_array![0 => Float32x2];
        let flag_attrs = wgpu::vertex_attr_array![1 => Uint32];
        let buffers = [
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<Vec2>() as u64,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &position_attrs,
            },
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<u32>() as u64,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &flag_attrs,
            },
        ];

        let pipeline = create_pipeline(
            ctx,
            PipelineDesc {
                label: "meshpad marker pipeline",
                shader_src: include_str!("shaders/markers.wgsl"),
                bind_group_layout: &uniform.layout,
                buffers: &buffers,
                topology: wgpu::PrimitiveTopology::TriangleList,
            },
        );

        self.pipeline_key = Some(key);
        self.pipeline = Some(pipeline);
        self.uniform = Some(uniform);
    }
}
