use anyhow::{Context, Result};

use meshpad_editor::{Editor, EditorConfig};
use meshpad_engine::core::{App, AppControl, FrameCtx};
use meshpad_engine::device::GpuInit;
use meshpad_engine::input::InputEvent;
use meshpad_engine::logging::{init_logging, LoggingConfig};
use meshpad_engine::paint::Color;
use meshpad_engine::render::{LineRenderer, MarkerRenderer, MarkerStyle};
use meshpad_engine::window::{Runtime, RuntimeConfig};

/// Host glue: input and resizes go to the editor, frames draw its graph.
struct Studio {
    editor: Editor,
    lines: LineRenderer,
    markers: MarkerRenderer,
}

impl Studio {
    fn new(config: EditorConfig) -> Result<Self> {
        let lines = LineRenderer::new(
            config.vertex_capacity,
            config.line_capacity,
            Color::from_srgb_u8(20, 20, 24, 255),
        );
        let markers = MarkerRenderer::new(config.vertex_capacity, MarkerStyle::default());
        let editor = Editor::with_demo(config).context("failed to set up editor")?;

        Ok(Self { editor, lines, markers })
    }
}

impl App for Studio {
    fn on_resize(&mut self, width: f32, height: f32) {
        self.editor.resize(width, height);
    }

    fn on_input(&mut self, event: &InputEvent) -> AppControl {
        self.editor.handle_event(event);
        AppControl::Continue
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let graph = self.editor.graph_view();
        let lines = &mut self.lines;
        let markers = &mut self.markers;

        ctx.render(Color::from_straight(1.0, 1.0, 1.0, 1.0), |rctx, target| {
            lines.render(rctx, target, &graph);
            markers.render(rctx, target, &graph);
        })
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let studio = Studio::new(EditorConfig::default())?;
    let snapshot = studio.editor.snapshot();
    log::info!(
        "meshpad: {} vertices, {} lines",
        snapshot.vertex_count,
        snapshot.line_count
    );

    let config = RuntimeConfig {
        title: "meshpad".to_string(),
        maximized: true,
        ..RuntimeConfig::default()
    };
    Runtime::run(config, GpuInit::default(), studio)
}
