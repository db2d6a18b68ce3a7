use crate::coords::Vec2;
use crate::paint::Color;

use super::common::{
    create_pipeline, pipeline_key, GpuArray, GraphUniform, PipelineDesc, PipelineKey, UniformBinding,
};
use super::{GraphView, RenderCtx, RenderTarget};

/// Draws the graph's line segments.
///
/// Vertex positions and line indices live in fixed-capacity GPU buffers sized
/// to the editor's capacities up front. They are re-uploaded only when the
/// graph revision changes, so an idle frame costs one uniform write.
pub struct LineRenderer {
    color: Color,

    pipeline_key: Option<PipelineKey>,
    pipeline: Option<wgpu::RenderPipeline>,
    uniform: Option<UniformBinding>,

    positions: GpuArray<Vec2>,
    indices: GpuArray<u32>,
    uploaded_revision: Option<u64>,
}

impl LineRenderer {
    pub fn new(vertex_capacity: usize, line_capacity: usize, color: Color) -> Self {
        Self {
            color,
            pipeline_key: None,
            pipeline: None,
            uniform: None,
            positions: GpuArray::new("meshpad line positions", wgpu::BufferUsages::VERTEX, vertex_capacity),
            indices: GpuArray::new("meshpad line indices", wgpu::BufferUsages::INDEX, line_capacity * 2),
            uploaded_revision: None,
        }
    }

    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, graph: &GraphView<'_>) {
        self.ensure_pipeline(ctx);
        self.upload(ctx, graph);

        if graph.indices.len() < 2 {
            return;
        }

        let Some(uniform) = self.uniform.as_ref() else { return };
        uniform.write(
            ctx,
            &GraphUniform::new(&graph.view, ctx.viewport, self.color, self.color, 0.0),
        );

        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(positions) = self.positions.buffer() else { return };
        let Some(indices) = self.indices.buffer() else { return };

        // Odd trailing index (never produced by the graph) is not drawn.
        let index_count = (graph.indices.len() & !1) as u32;

        let mut rpass = target.begin_pass("meshpad line pass");
        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, &uniform.bind_group, &[]);
        rpass.set_vertex_buffer(0, positions.slice(..));
        rpass.set_index_buffer(indices.slice(..), wgpu::IndexFormat::Uint32);
        rpass.draw_indexed(0..index_count, 0, 0..1);
    }

    fn upload(&mut self, ctx: &RenderCtx<'_>, graph: &GraphView<'_>) {
        let recreated = self.positions.ensure(ctx, graph.positions.len())
            | self.indices.ensure(ctx, graph.indices.len());

        if !recreated && self.uploaded_revision == Some(graph.revision) {
            return;
        }

        self.positions.write(ctx, graph.positions);
        self.indices.write(ctx, graph.indices);
        self.uploaded_revision = Some(graph.revision);
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        let key = pipeline_key(ctx);
        if self.pipeline_key == Some(key) && self.pipeline.is_some() {
            return;
        }

        let uniform = UniformBinding::new(ctx.device, "meshpad line uniform");

        let attrs = wgpu::vertex_attr_array![0 => Float32x2];
        let layout = wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vec2>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &attrs,
        };

        let pipeline = create_pipeline(
            ctx,
            PipelineDesc {
                label: "meshpad line pipeline",
                shader_src: include_str!("shaders/lines.wgsl"),
                bind_group_layout: &uniform.layout,
                buffers: &[layout],
                topology: wgpu::PrimitiveTopology::LineList,
            },
        );

        self.pipeline_key = Some(key);
        self.pipeline = Some(pipeline);
        self.uniform = Some(uniform);
    }
}
